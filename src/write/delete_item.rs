use crate::{
    common,
    error::{Error, Result},
    write,
};

use serde::Serialize;

/// Delete item parameters, ready to apply to a `DeleteItem` builder.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteItemParams {
    /// Primary key of the item to delete.
    pub key: common::item::Item,
    /// Table name, condition and return settings.
    pub write_params: write::common::WriteParams,
}

/// Delete item operation.
///
/// ```rust
/// use dynamodb_params::{common, write};
///
/// let delete_item = write::delete_item::DeleteItem {
///     keys: common::key::Keys {
///         hash_key: common::key::Key {
///             name: "id".to_string(),
///             value: "1".to_string(),
///         },
///         ..Default::default()
///     },
///     write_args: write::common::WriteArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// let params = delete_item.build().unwrap();
/// assert_eq!(params.key.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteItem<T> {
    /// The primary key of the item to delete.
    pub keys: common::key::Keys<T>,
    /// Additional write arguments (table name, return values).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<DeleteItem<T>> for DeleteItemParams {
    type Error = Error;

    fn try_from(delete_item: DeleteItem<T>) -> Result<Self> {
        let key = delete_item.keys.try_into()?;
        let operation = Self {
            key,
            write_params: delete_item.write_args.into(),
        };
        Ok(operation)
    }
}

impl<T: Serialize> DeleteItem<T> {
    /// Build the delete item parameters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_params.delete_item",
            skip_all,
            fields(table_name = %self.write_args.table_name),
            err
        )
    )]
    pub fn build(self) -> Result<DeleteItemParams> {
        self.try_into()
    }
}

/// apply delete item parameters to a `DeleteItem` builder
#[macro_export]
macro_rules! apply_delete_item_params {
    ($builder:expr, $delete_item_params:expr) => {{
        let params = $delete_item_params;
        $crate::apply_write_params!($builder.set_key(Some(params.key)), params.write_params)
    }};
}
