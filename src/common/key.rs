use crate::{
    common::{codec, item},
    error::{Error, Result},
};

use aws_sdk_dynamodb::types;
use serde::Serialize;

/// Key attribute of a table definition.
///
/// ```rust
/// use aws_sdk_dynamodb::types::ScalarAttributeType;
/// use dynamodb_params::common::key;
///
/// let key = key::KeyDefinition {
///     name: "id".to_string(),
///     attribute_type: ScalarAttributeType::S,
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KeyDefinition {
    /// The attribute name of the key.
    pub name: String,
    /// The scalar type of the key: string, number or binary.
    pub attribute_type: types::ScalarAttributeType,
}

/// Primary key definition of a table (hash key and optional range key).
#[derive(Clone, Debug, PartialEq)]
pub struct KeyDefinitions {
    /// The hash (partition) key.
    pub hash_key: KeyDefinition,
    /// The range (sort) key, only for tables with composite primary keys.
    pub range_key: Option<KeyDefinition>,
}

/// Attribute definitions and key schema derived from [`KeyDefinitions`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeySchema {
    /// One definition per key attribute, hash key first.
    pub attribute_definitions: Vec<types::AttributeDefinition>,
    /// One schema element per key attribute, `HASH` first and `RANGE` second.
    pub key_schema: Vec<types::KeySchemaElement>,
}

impl KeySchema {
    fn push(&mut self, key: KeyDefinition, key_type: types::KeyType) -> Result<()> {
        let attribute_definition = types::AttributeDefinition::builder()
            .attribute_name(&key.name)
            .attribute_type(key.attribute_type)
            .build()?;
        let key_schema_element = types::KeySchemaElement::builder()
            .attribute_name(key.name)
            .key_type(key_type)
            .build()?;
        self.attribute_definitions.push(attribute_definition);
        self.key_schema.push(key_schema_element);
        Ok(())
    }
}

impl TryFrom<KeyDefinitions> for KeySchema {
    type Error = Error;

    fn try_from(keys: KeyDefinitions) -> Result<Self> {
        let capacity = if keys.range_key.is_some() { 2 } else { 1 };
        let mut key_schema = Self {
            attribute_definitions: Vec::with_capacity(capacity),
            key_schema: Vec::with_capacity(capacity),
        };
        key_schema.push(keys.hash_key, types::KeyType::Hash)?;
        if let Some(range_key) = keys.range_key {
            key_schema.push(range_key, types::KeyType::Range)?;
        }
        Ok(key_schema)
    }
}

/// Key component.
///
/// ```rust
/// use dynamodb_params::common::key;
///
/// let key = key::Key {
///     name: "id".to_string(),
///     value: "1".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

/// Primary key value of an item (hash key and optional range key).
///
/// ```rust
/// use dynamodb_params::common::key;
///
/// let keys = key::Keys {
///     hash_key: key::Key {
///         name: "id".to_string(),
///         value: "1".to_string(),
///     },
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keys<T> {
    /// The hash key (required).
    pub hash_key: Key<T>,
    /// The range key (optional, only for tables with composite primary keys).
    pub range_key: Option<Key<T>>,
}

impl<T: Serialize> TryFrom<Keys<T>> for item::Item {
    type Error = Error;

    fn try_from(keys: Keys<T>) -> Result<Self> {
        let hash_key_value = codec::to_attribute_value(keys.hash_key.value)?;
        let mut item = Self::from([(keys.hash_key.name, hash_key_value)]);
        if let Some(range_key) = keys.range_key {
            let range_key_value = codec::to_attribute_value(range_key.value)?;
            item.insert(range_key.name, range_key_value);
        }
        Ok(item)
    }
}
