//! Common utilities for DynamoDB request parameters.
//!
//! This module provides the value and item codecs plus the shared pieces used across
//! read, write and table operations: key handling and condition expressions.

/// Bidirectional conversion between native values and attribute values.
pub mod codec;

/// Condition expression building for conditional writes.
pub mod condition;

/// Whole-record conversion between native records and items.
pub mod item;

/// Key types for table definitions and for identifying items.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

/// Placeholder standing for an attribute name in an expression.
pub(crate) fn name_placeholder(name: &str) -> String {
    format!("#{name}Attribute")
}

/// Placeholder standing for an attribute value in an expression.
pub(crate) fn value_placeholder(name: &str) -> String {
    format!(":{name}Value")
}

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// Expression together with the placeholder mappings it refers to.
///
/// Placeholders are derived from the attribute name alone, so two attributes whose
/// placeholders coincide overwrite each other's entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionInput {
    /// The expression string.
    pub expression: String,
    /// Name placeholders (`#<name>Attribute`) mapped to attribute names.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Value placeholders (`:<name>Value`) mapped to attribute values.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    /// Single `#<name>Attribute <operator> :<name>Value` comparison.
    pub(crate) fn comparison(name: String, operator: &str, value: types::AttributeValue) -> Self {
        let name_placeholder = name_placeholder(&name);
        let value_placeholder = value_placeholder(&name);
        let expression = format!("{name_placeholder} {operator} {value_placeholder}");
        Self {
            expression,
            expression_attribute_names: collections::HashMap::from([(name_placeholder, name)]),
            expression_attribute_values: collections::HashMap::from([(value_placeholder, value)]),
        }
    }

    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }
}
