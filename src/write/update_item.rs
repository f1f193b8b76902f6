use crate::{
    common,
    error::{Error, Result},
    write,
};

use serde::Serialize;

/// Separator between the assignments of a SET clause.
const ASSIGNMENT_SEPARATOR: &str = ", ";

/// Build a SET update expression assigning every field of a record.
///
/// Each field `k` gets the name placeholder `#<k>Attribute` and the value placeholder
/// `:<k>Value`; assignments keep the record's field order.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_params::write::update_item;
/// use serde_json::json;
///
/// let update = update_item::update_expression(json!({"age": 5, "name": "bob"})).unwrap();
/// assert_eq!(
///     update.expression,
///     "SET #ageAttribute = :ageValue, #nameAttribute = :nameValue",
/// );
/// assert_eq!(
///     update.expression_attribute_values[":nameValue"],
///     AttributeValue::S("bob".to_string()),
/// );
/// ```
pub fn update_expression<T: Serialize>(record: T) -> Result<common::ExpressionInput> {
    let fields = common::item::to_fields(record)?;
    if fields.is_empty() {
        return Err(Error::EmptyRecord);
    }
    let mut operations = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let value = common::codec::encode(value)?;
        let operation = common::ExpressionInput::comparison(name, "=", value);
        operations.push(operation);
    }
    let mut operation = common::ExpressionInput::merge(ASSIGNMENT_SEPARATOR, operations);
    operation.expression = format!("SET {}", operation.expression);
    Ok(operation)
}

/// Update item parameters, ready to apply to an `UpdateItem` builder.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItemParams {
    /// Primary key of the item to update.
    pub key: common::item::Item,
    /// The SET expression and its placeholders.
    pub update: common::ExpressionInput,
    /// Table name, uniqueness condition and return settings.
    pub write_params: write::common::WriteParams,
}

/// Update item operation.
///
/// ```rust
/// use dynamodb_params::{common, write};
/// use serde_json::{Value, json};
///
/// let update_item = write::update_item::UpdateItem {
///     keys: common::key::Keys {
///         hash_key: common::key::Key {
///             name: "id".to_string(),
///             value: Value::String("1".to_string()),
///         },
///         ..Default::default()
///     },
///     record: json!({"name": "Jane"}),
///     write_args: write::common::WriteArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// let params = update_item.build().unwrap();
/// assert_eq!(params.update.expression, "SET #nameAttribute = :nameValue");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem<K, R> {
    /// The primary key of the item to update.
    pub keys: common::key::Keys<K>,
    /// Fields to assign, in the order they should appear in the SET clause.
    pub record: R,
    /// Additional write arguments (table name, unique fields, return values).
    pub write_args: write::common::WriteArgs,
}

impl<K: Serialize, R: Serialize> TryFrom<UpdateItem<K, R>> for UpdateItemParams {
    type Error = Error;

    fn try_from(update_item: UpdateItem<K, R>) -> Result<Self> {
        let key = update_item.keys.try_into()?;
        let update = update_expression(update_item.record)?;
        let operation = Self {
            key,
            update,
            write_params: update_item.write_args.into(),
        };
        Ok(operation)
    }
}

impl<K: Serialize, R: Serialize> UpdateItem<K, R> {
    /// Build the update item parameters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_params.update_item",
            skip_all,
            fields(table_name = %self.write_args.table_name),
            err
        )
    )]
    pub fn build(self) -> Result<UpdateItemParams> {
        self.try_into()
    }
}

/// apply update item parameters to an `UpdateItem` builder
#[macro_export]
macro_rules! apply_update_item_params {
    ($builder:expr, $update_item_params:expr) => {{
        let params = $update_item_params;
        $crate::apply_write_params!(
            $builder
                .set_key(Some(params.key))
                .update_expression(params.update.expression)
                .set_expression_attribute_names(Some(params.update.expression_attribute_names))
                .set_expression_attribute_values(Some(params.update.expression_attribute_values)),
            params.write_params
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::{operation::update_item::UpdateItemInput, types};
    use indexmap::IndexMap;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::collections;

    #[rstest]
    #[case::single_field(
        json!(
            {
                "attr": "val"
            }
        ),
        common::ExpressionInput {
            expression: "SET #attrAttribute = :attrValue".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#attrAttribute".to_string(), "attr".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":attrValue".to_string(),
                        types::AttributeValue::S(
                            "val".to_string()
                        )
                    ),
                ]
            ),
        }
    )]
    #[case::number_and_string(
        json!(
            {
                "age": 5,
                "name": "bob"
            }
        ),
        common::ExpressionInput {
            expression: "SET #ageAttribute = :ageValue, #nameAttribute = :nameValue".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#ageAttribute".to_string(), "age".to_string()),
                    ("#nameAttribute".to_string(), "name".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":ageValue".to_string(),
                        types::AttributeValue::N(
                            "5".to_string()
                        )
                    ),
                    (
                        ":nameValue".to_string(),
                        types::AttributeValue::S(
                            "bob".to_string()
                        )
                    ),
                ]
            ),
        }
    )]
    #[case::keeps_field_order(
        json!(
            {
                "z": ["a"],
                "a": [1]
            }
        ),
        common::ExpressionInput {
            expression: "SET #zAttribute = :zValue, #aAttribute = :aValue".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#zAttribute".to_string(), "z".to_string()),
                    ("#aAttribute".to_string(), "a".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":zValue".to_string(),
                        types::AttributeValue::Ss(
                            vec![
                                "a".to_string(),
                            ]
                        )
                    ),
                    (
                        ":aValue".to_string(),
                        types::AttributeValue::Ns(
                            vec![
                                "1".to_string(),
                            ]
                        )
                    ),
                ]
            ),
        }
    )]
    fn test_update_expression(#[case] record: Value, #[case] expected: common::ExpressionInput) {
        let actual = update_expression(record).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_update_expression_from_index_map() {
        let record = IndexMap::from([("b", 1), ("a", 2)]);
        let actual = update_expression(record).unwrap();
        assert_eq!(
            actual.expression,
            "SET #bAttribute = :bValue, #aAttribute = :aValue"
        );
    }

    #[test]
    fn test_update_expression_empty_record() {
        let actual = update_expression(json!({}));
        assert!(matches!(actual, Err(Error::EmptyRecord)));
    }

    #[test]
    fn test_update_expression_nested_record() {
        let actual = update_expression(json!({"a": {"b": 1}}));
        assert!(matches!(actual, Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_update_item() {
        let update_item = UpdateItem {
            keys: common::key::Keys {
                hash_key: common::key::Key {
                    name: "id".to_string(),
                    value: json!("1"),
                },
                range_key: Some(common::key::Key {
                    name: "ts".to_string(),
                    value: json!(10),
                }),
            },
            record: json!({"name": "Jane"}),
            write_args: write::common::WriteArgs {
                return_values: Some(types::ReturnValue::AllNew),
                table_name: "users".to_string(),
                ..Default::default()
            },
        };
        let actual = update_item.build().unwrap();
        let expected = UpdateItemParams {
            key: common::item::Item::from([
                ("id".to_string(), types::AttributeValue::S("1".to_string())),
                ("ts".to_string(), types::AttributeValue::N("10".to_string())),
            ]),
            update: common::ExpressionInput {
                expression: "SET #nameAttribute = :nameValue".to_string(),
                expression_attribute_names: collections::HashMap::from([(
                    "#nameAttribute".to_string(),
                    "name".to_string(),
                )]),
                expression_attribute_values: collections::HashMap::from([(
                    ":nameValue".to_string(),
                    types::AttributeValue::S("Jane".to_string()),
                )]),
            },
            write_params: write::common::WriteParams {
                return_values: Some(types::ReturnValue::AllNew),
                table_name: "users".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_update_item_typed_record() {
        #[derive(Serialize)]
        struct Profile {
            name: String,
            age: u32,
        }

        let update_item = UpdateItem {
            keys: common::key::Keys {
                hash_key: common::key::Key {
                    name: "id".to_string(),
                    value: "1".to_string(),
                },
                ..Default::default()
            },
            record: Profile {
                name: "Jane".to_string(),
                age: 30,
            },
            write_args: write::common::WriteArgs {
                table_name: "users".to_string(),
                ..Default::default()
            },
        };
        let actual = update_item.build().unwrap();
        assert_eq!(
            actual.key,
            common::item::Item::from([(
                "id".to_string(),
                types::AttributeValue::S("1".to_string())
            )])
        );
        assert_eq!(
            actual.update.expression,
            "SET #nameAttribute = :nameValue, #ageAttribute = :ageValue"
        );
        assert_eq!(
            actual.update.expression_attribute_values[":ageValue"],
            types::AttributeValue::N("30".to_string())
        );
    }

    #[test]
    fn test_apply_update_item_params() {
        let params = UpdateItem {
            keys: common::key::Keys {
                hash_key: common::key::Key {
                    name: "id".to_string(),
                    value: json!("1"),
                },
                ..Default::default()
            },
            record: json!({"age": 5}),
            write_args: write::common::WriteArgs {
                table_name: "users".to_string(),
                unique_fields: vec!["id".to_string()],
                ..Default::default()
            },
        }
        .build()
        .unwrap();
        let builder = crate::apply_update_item_params!(UpdateItemInput::builder(), params);
        assert_eq!(
            builder.get_update_expression().as_deref(),
            Some("SET #ageAttribute = :ageValue")
        );
        assert_eq!(
            builder
                .get_expression_attribute_names()
                .as_ref()
                .and_then(|names| names.get("#ageAttribute"))
                .map(String::as_str),
            Some("age")
        );
        assert_eq!(
            builder.get_condition_expression().as_deref(),
            Some("attribute_not_exists(id)")
        );
        assert_eq!(builder.get_table_name().as_deref(), Some("users"));
    }
}
