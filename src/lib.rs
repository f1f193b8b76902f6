#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Params
//!
//! Typed conversion between native values and DynamoDB attribute values, and builders
//! for the request parameters that consume them.
//!
//! ## Overview
//!
//! This library performs no network I/O. It produces the structures the DynamoDB client
//! expects and leaves sending them to the caller:
//! - Encodes numbers, strings and homogeneous arrays as `N`, `S`, `NS` and `SS` attributes
//! - Decodes `S`, `SS`, `N` and `NS` attributes back into native values
//! - Derives attribute definitions and key schemas from a hash key and an optional range key
//! - Builds uniqueness conditions, SET update expressions and equality key conditions
//!
//! ## Quick Example
//!
//! ```rust
//! use aws_sdk_dynamodb::types::AttributeValue;
//! use dynamodb_params::{common, write};
//! use serde_json::{Value, json};
//!
//! let update_item = write::update_item::UpdateItem {
//!     keys: common::key::Keys {
//!         hash_key: common::key::Key {
//!             name: "id".to_string(),
//!             value: Value::String("1".to_string()),
//!         },
//!         ..Default::default()
//!     },
//!     record: json!({"age": 5, "name": "bob"}),
//!     write_args: write::common::WriteArgs {
//!         table_name: "users".to_string(),
//!         ..Default::default()
//!     },
//! };
//! let params = update_item.build().unwrap();
//! assert_eq!(
//!     params.update.expression,
//!     "SET #ageAttribute = :ageValue, #nameAttribute = :nameValue",
//! );
//! assert_eq!(
//!     params.update.expression_attribute_values[":ageValue"],
//!     AttributeValue::N("5".to_string()),
//! );
//! ```
//!
//! The parameters can then be applied to a client builder with
//! [`apply_update_item_params!`], e.g.
//! `apply_update_item_params!(client.update_item(), params).send().await`.
//!
//! ## Modules
//!
//! - [`mod@common`] - Value and item codecs, keys and conditions
//! - [`mod@read`] - Read parameters (GetItem, Query)
//! - [`mod@write`] - Write parameters (PutItem, UpdateItem, DeleteItem)
//! - [`mod@table`] - Table parameters (CreateTable)

/// Value and item codecs, keys and condition expressions.
pub mod common;

/// Error type shared by every conversion and builder.
pub mod error;

/// Read parameters for retrieving data from DynamoDB tables.
///
/// This module provides parameters for:
/// - Getting individual items by key
/// - Querying items with equality key conditions
pub mod read;

/// Table parameters for creating DynamoDB tables.
pub mod table;

/// Write parameters for modifying data in DynamoDB tables.
///
/// This module provides parameters for:
/// - Putting new items, optionally only if they are unique
/// - Updating items with a SET expression
/// - Deleting items by key
pub mod write;

pub use error::{Error, Result};
