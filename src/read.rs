//! Read operations for retrieving data from DynamoDB tables.
//!
//! This module builds the parameters for:
//! - Getting individual items by primary key
//! - Querying items with equality key conditions

/// Common utilities and types for read operations.
pub mod common;

/// Get item parameters for retrieving a single item by primary key.
pub mod get_item;

/// Query parameters and key condition building.
pub mod query;
