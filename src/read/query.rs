use crate::{
    common,
    error::{Error, Result},
    read,
};

use aws_sdk_dynamodb::types;
use serde::Serialize;
use std::collections;

/// Separator joining the comparisons of a key condition expression.
const AND: &str = " AND ";

/// Build equality key conditions, one per field of `keys`.
///
/// Only `EQ` comparisons are produced.
///
/// ```rust
/// use aws_sdk_dynamodb::types::{AttributeValue, ComparisonOperator, Condition};
/// use dynamodb_params::read::query;
/// use serde_json::json;
///
/// let key_conditions = query::key_conditions(json!({"id": "abc"})).unwrap();
/// let expected = Condition::builder()
///     .comparison_operator(ComparisonOperator::Eq)
///     .attribute_value_list(AttributeValue::S("abc".to_string()))
///     .build()
///     .unwrap();
/// assert_eq!(key_conditions["id"], expected);
/// ```
pub fn key_conditions<T: Serialize>(
    keys: T,
) -> Result<collections::HashMap<String, types::Condition>> {
    let fields = common::item::to_fields(keys)?;
    if fields.is_empty() {
        return Err(Error::EmptyRecord);
    }
    let mut key_conditions = collections::HashMap::with_capacity(fields.len());
    for (name, value) in fields {
        let value = common::codec::encode(value)?;
        let condition = types::Condition::builder()
            .comparison_operator(types::ComparisonOperator::Eq)
            .attribute_value_list(value)
            .build()?;
        key_conditions.insert(name, condition);
    }
    Ok(key_conditions)
}

/// Build an equality key condition expression, one comparison per field of `keys`.
///
/// Same placeholders as update expressions: `#<k>Attribute = :<k>Value`.
pub fn key_condition_expression<T: Serialize>(keys: T) -> Result<common::ExpressionInput> {
    let fields = common::item::to_fields(keys)?;
    if fields.is_empty() {
        return Err(Error::EmptyRecord);
    }
    let mut operations = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let value = common::codec::encode(value)?;
        operations.push(common::ExpressionInput::comparison(name, "=", value));
    }
    Ok(common::ExpressionInput::merge(AND, operations))
}

/// Query parameters, ready to apply to a `Query` builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    /// The name of a secondary index to query instead of the base table.
    pub index_name: Option<String>,
    /// Equality conditions on the key attributes.
    pub key_conditions: collections::HashMap<String, types::Condition>,
    /// The maximum number of items to evaluate.
    pub limit: Option<i32>,
    /// Table name and read consistency.
    pub read_params: read::common::ReadParams,
    /// Whether to scan the index forward (ascending) or backward (descending).
    pub scan_index_forward: Option<bool>,
}

/// Query operation.
///
/// ```rust
/// use dynamodb_params::read;
/// use serde_json::json;
///
/// let query = read::query::Query {
///     keys: json!({"id": "1"}),
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let params = query.build().unwrap();
/// assert!(params.key_conditions.contains_key("id"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query<T> {
    /// The name of a secondary index to query instead of the base table.
    pub index_name: Option<String>,
    /// Key attributes and the values they must equal.
    pub keys: T,
    /// The maximum number of items to evaluate (not necessarily the number of matching items).
    pub limit: Option<i32>,
    /// Additional read arguments (table name, consistency).
    pub read_args: read::common::ReadArgs,
    /// Whether to scan the index forward (ascending) or backward (descending).
    pub scan_index_forward: Option<bool>,
}

impl<T: Serialize> TryFrom<Query<T>> for QueryParams {
    type Error = Error;

    fn try_from(query: Query<T>) -> Result<Self> {
        let key_conditions = key_conditions(query.keys)?;
        let operation = Self {
            index_name: query.index_name,
            key_conditions,
            limit: query.limit,
            read_params: query.read_args.into(),
            scan_index_forward: query.scan_index_forward,
        };
        Ok(operation)
    }
}

impl<T: Serialize> Query<T> {
    /// Build the query parameters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_params.query",
            skip_all,
            fields(table_name = %self.read_args.table_name),
            err
        )
    )]
    pub fn build(self) -> Result<QueryParams> {
        self.try_into()
    }
}

/// apply query parameters to a `Query` builder
#[macro_export]
macro_rules! apply_query_params {
    ($builder:expr, $query_params:expr) => {{
        let params = $query_params;
        $crate::apply_read_params!(
            $builder
                .set_index_name(params.index_name)
                .set_key_conditions(Some(params.key_conditions))
                .set_limit(params.limit)
                .set_scan_index_forward(params.scan_index_forward),
            params.read_params
        )
    }};
}
