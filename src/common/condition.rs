/// Separator joining the clauses of a condition expression.
const AND: &str = " AND ";

/// Build a condition that only holds when none of the given attributes exist yet.
///
/// Used on writes to keep items unique. Attribute names go into the expression
/// verbatim, in input order. Returns `None` when there is nothing to check.
///
/// ```rust
/// use dynamodb_params::common::condition;
///
/// let condition = condition::attribute_not_exists(["email", "username"]);
/// assert_eq!(
///     condition.as_deref(),
///     Some("attribute_not_exists(email) AND attribute_not_exists(username)"),
/// );
/// assert_eq!(condition::attribute_not_exists(Vec::<String>::new()), None);
/// ```
pub fn attribute_not_exists<I>(field_names: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let clauses: Vec<_> = field_names
        .into_iter()
        .map(|field_name| format!("attribute_not_exists({})", field_name.as_ref()))
        .collect();
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(AND))
    }
}
