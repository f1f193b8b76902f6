use crate::{
    common,
    error::{Error, Result},
    read,
};

use serde::Serialize;

/// Get item parameters, ready to apply to a `GetItem` builder.
#[derive(Clone, Debug, PartialEq)]
pub struct GetItemParams {
    /// Primary key of the item to read.
    pub key: common::item::Item,
    /// Table name and read consistency.
    pub read_params: read::common::ReadParams,
}

/// Get item operation.
///
/// ```rust
/// use dynamodb_params::{common, read};
///
/// let get_item = read::get_item::GetItem {
///     keys: common::key::Keys {
///         hash_key: common::key::Key {
///             name: "id".to_string(),
///             value: 1,
///         },
///         ..Default::default()
///     },
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// let params = get_item.build().unwrap();
/// assert_eq!(params.read_params.table_name, "users");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GetItem<T> {
    /// The primary key of the item to retrieve.
    pub keys: common::key::Keys<T>,
    /// Additional read arguments (table name, consistency).
    pub read_args: read::common::ReadArgs,
}

impl<T: Serialize> TryFrom<GetItem<T>> for GetItemParams {
    type Error = Error;

    fn try_from(get_item: GetItem<T>) -> Result<Self> {
        let key = get_item.keys.try_into()?;
        let operation = Self {
            key,
            read_params: get_item.read_args.into(),
        };
        Ok(operation)
    }
}

impl<T: Serialize> GetItem<T> {
    /// Build the get item parameters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_params.get_item",
            skip_all,
            fields(table_name = %self.read_args.table_name),
            err
        )
    )]
    pub fn build(self) -> Result<GetItemParams> {
        self.try_into()
    }
}

/// apply get item parameters to a `GetItem` builder
#[macro_export]
macro_rules! apply_get_item_params {
    ($builder:expr, $get_item_params:expr) => {{
        let params = $get_item_params;
        $crate::apply_read_params!($builder.set_key(Some(params.key)), params.read_params)
    }};
}
