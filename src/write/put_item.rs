use crate::{
    common,
    error::{Error, Result},
    write,
};

use serde::Serialize;

/// Put item parameters, ready to apply to a `PutItem` builder.
#[derive(Clone, Debug, PartialEq)]
pub struct PutItemParams {
    /// The encoded item.
    pub item: common::item::Item,
    /// Table name, uniqueness condition and return settings.
    pub write_params: write::common::WriteParams,
}

/// Put item operation.
///
/// ```rust
/// use dynamodb_params::write;
/// use serde_json::json;
///
/// let put_item = write::put_item::PutItem {
///     item: json!({"id": "1", "email": "john@example.com"}),
///     write_args: write::common::WriteArgs {
///         table_name: "users".to_string(),
///         unique_fields: vec!["id".to_string()],
///         ..Default::default()
///     },
/// };
/// let params = put_item.build().unwrap();
/// assert_eq!(
///     params.write_params.condition_expression.as_deref(),
///     Some("attribute_not_exists(id)"),
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PutItem<T> {
    /// The item to put into the table.
    pub item: T,
    /// Additional write arguments (table name, unique fields, return values).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<PutItem<T>> for PutItemParams {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = common::item::to_item(put_item.item)?;
        let operation = Self {
            item,
            write_params: put_item.write_args.into(),
        };
        Ok(operation)
    }
}

impl<T: Serialize> PutItem<T> {
    /// Build the put item parameters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_params.put_item",
            skip_all,
            fields(table_name = %self.write_args.table_name),
            err
        )
    )]
    pub fn build(self) -> Result<PutItemParams> {
        self.try_into()
    }
}

/// apply put item parameters to a `PutItem` builder
#[macro_export]
macro_rules! apply_put_item_params {
    ($builder:expr, $put_item_params:expr) => {{
        let params = $put_item_params;
        $crate::apply_write_params!($builder.set_item(Some(params.item)), params.write_params)
    }};
}
