use crate::{
    common::codec,
    error::{Error, Result},
};

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::collections;

/// Item in its wire form, ready to hand to the DynamoDB client.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Decoded item, fields sorted by name.
pub type Record = IndexMap<String, Value>;

/// Lower a serializable record into its fields, keeping their declaration order.
pub(crate) fn to_fields<T: Serialize>(record: T) -> Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(Error::MissingArgument),
        _ => Err(Error::UnsupportedType("non-record value")),
    }
}

/// Encode every field of a record.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_params::common::item;
/// use serde_json::json;
///
/// let item = item::to_item(json!({"id": "1", "age": 30})).unwrap();
/// assert_eq!(item["id"], AttributeValue::S("1".to_string()));
/// assert_eq!(item["age"], AttributeValue::N("30".to_string()));
/// ```
pub fn to_item<T: Serialize>(record: T) -> Result<Item> {
    let fields = to_fields(record)?;
    let mut item = Item::with_capacity(fields.len());
    for (name, value) in fields {
        let value = codec::encode(value)?;
        item.insert(name, value);
    }
    Ok(item)
}

/// Decode every field of an item.
pub fn from_item(item: Item) -> Result<Record> {
    let mut record = Record::with_capacity(item.len());
    for (name, value) in item {
        let value = codec::from_attribute_value(value)?;
        record.insert(name, value);
    }
    record.sort_keys();
    Ok(record)
}

/// Decode an item straight into a typed record.
///
/// Whole numbers decode as integers, so integer fields of `T` decode directly.
pub fn from_item_as<T: DeserializeOwned>(item: Item) -> Result<T> {
    let record = from_item(item)?;
    let value = Value::Object(record.into_iter().collect());
    let record = serde_json::from_value(value)?;
    Ok(record)
}

/// Decode every item of a multi-item response.
pub fn from_items(items: Vec<Item>) -> Result<Vec<Record>> {
    items.into_iter().map(from_item).collect()
}
