use crate::common;

use aws_sdk_dynamodb::types;

/// Write parameters shared by Put, Update and Delete, ready to apply to a builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteParams {
    /// `attribute_not_exists(...)` condition built from the unique fields, if any.
    pub condition_expression: Option<String>,
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Which item attributes to return.
    pub return_values: Option<types::ReturnValue>,
    /// The name of the table to write to.
    pub table_name: String,
}

/// Arguments common to all write operations (Put, Update, Delete).
///
/// ```rust
/// use dynamodb_params::write;
///
/// let write_args = write::common::WriteArgs {
///     table_name: "users".to_string(),
///     unique_fields: vec!["email".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteArgs {
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Which item attributes to return.
    ///
    /// Options: `AllOld`, `AllNew`, `UpdatedOld`, `UpdatedNew`, or `None`.
    pub return_values: Option<types::ReturnValue>,
    /// The name of the table to write to.
    pub table_name: String,
    /// Attributes that must not exist yet for the write to succeed.
    ///
    /// If the item already holds any of them, the write fails with a conditional check error.
    pub unique_fields: Vec<String>,
}

impl From<WriteArgs> for WriteParams {
    fn from(write_args: WriteArgs) -> Self {
        Self {
            condition_expression: common::condition::attribute_not_exists(
                &write_args.unique_fields,
            ),
            return_consumed_capacity: write_args.return_consumed_capacity,
            return_values: write_args.return_values,
            table_name: write_args.table_name,
        }
    }
}

/// apply common write parameters to a Put, Update or Delete builder
#[macro_export]
macro_rules! apply_write_params {
    ($builder:expr, $write_params:expr) => {
        $builder
            .set_condition_expression($write_params.condition_expression)
            .set_return_consumed_capacity($write_params.return_consumed_capacity)
            .set_return_values($write_params.return_values)
            .table_name($write_params.table_name)
    };
}
