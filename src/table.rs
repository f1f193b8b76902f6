//! Table operations.
//!
//! This module builds the parameters for creating tables from a hash key and an
//! optional range key.

/// Create table parameters with a derived key schema and fixed throughput.
pub mod create_table;
