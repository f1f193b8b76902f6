//! Write operations for modifying data in DynamoDB tables.
//!
//! This module builds the parameters for:
//! - Putting new items or replacing existing ones
//! - Updating items with a SET expression
//! - Deleting items by primary key

/// Common utilities and types for write operations.
pub mod common;

/// Delete item parameters for removing items from tables.
pub mod delete_item;

/// Put item parameters for creating or replacing items.
pub mod put_item;

/// Update item parameters and SET expression building.
pub mod update_item;
