//! Database connection and query utilities for CozoDB.
//!
//! This module provides the database abstraction layer for the hospital schema:
//! - Connection management (SQLite-backed, or in-memory for tests and demos)
//! - Query execution with parameter binding
//! - Result row extraction with type-safe helpers
//!
//! # Architecture
//!
//! CozoDB plays the role of the relational engine. Each base entity is a stored
//! relation keyed by its integer id, and every read is a CozoScript (Datalog)
//! query returning `DataValue` cells that are extracted into Rust types.
//!
//! # Type Decisions
//!
//! **Why `i64` for identifiers?**
//! CozoDB returns all integers as `Num::Int(i64)`. Using `i64` throughout avoids
//! lossy conversions when ids flow back into parameters.
//!
//! **Why are timestamps stored as strings?**
//! Cozo has no calendar type. Dates are stored as `%Y-%m-%d` and timestamps as
//! `%Y-%m-%d %H:%M:%S`, which sort lexicographically in time order and can be
//! compared with plain string operators inside queries.

mod backend;
mod config;
mod connection;
mod query;
mod value;

pub mod schema;

pub use backend::{DatabaseBackend, Params, QueryResult};
pub use config::DatabaseConfig;
pub use connection::{open_db, open_mem_db, CozoBackend};
pub use query::{
    get_i64, get_opt_i64, get_opt_string, get_parsed, get_string, row_map, run_query,
    run_query_no_params, RowMap,
};
pub use value::{
    extract_i64, extract_opt_i64, extract_opt_string, extract_string, extract_string_or,
    DatabaseValue,
};

use cozo::{DataValue, Num};
use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Missing column '{name}' in query result")]
    MissingColumn { name: String },

    #[error("Invalid value in column '{name}': {message}")]
    InvalidColumn { name: String, message: String },
}

/// Build an integer parameter value.
pub fn int_value(value: i64) -> DataValue {
    DataValue::Num(Num::Int(value))
}

/// Build a string parameter value.
pub fn str_value(value: &str) -> DataValue {
    DataValue::Str(value.into())
}

/// Build a nullable string parameter value.
pub fn opt_str_value(value: Option<&str>) -> DataValue {
    value.map(str_value).unwrap_or(DataValue::Null)
}

/// Build a nullable integer parameter value.
pub fn opt_int_value(value: Option<i64>) -> DataValue {
    value.map(int_value).unwrap_or(DataValue::Null)
}
