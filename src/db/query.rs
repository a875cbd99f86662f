//! Query execution utilities.

use std::collections::BTreeMap;
use std::error::Error;

use cozo::DataValue;

use super::backend::{DatabaseBackend, Params, QueryResult};
use super::value::DatabaseValue;
use super::DbError;

/// A result row keyed by column name.
pub type RowMap = BTreeMap<String, DataValue>;

/// Run a query with parameters.
pub fn run_query(
    db: &dyn DatabaseBackend,
    script: &str,
    params: Params,
) -> Result<QueryResult, Box<dyn Error>> {
    db.execute_query(script, &params)
}

/// Run a query with no parameters
pub fn run_query_no_params(db: &dyn DatabaseBackend, script: &str) -> Result<QueryResult, Box<dyn Error>> {
    run_query(db, script, Params::new())
}

/// Pair each cell of a row with its column header.
pub fn row_map(headers: &[String], row: &[DataValue]) -> RowMap {
    headers
        .iter()
        .cloned()
        .zip(row.iter().cloned())
        .collect()
}

/// Required integer column of a row.
pub fn get_i64(row: &RowMap, name: &str) -> Result<i64, DbError> {
    let value = row.get(name).ok_or_else(|| DbError::MissingColumn {
        name: name.to_string(),
    })?;
    value.as_i64().ok_or_else(|| DbError::InvalidColumn {
        name: name.to_string(),
        message: format!("expected int, found {}", value.type_name()),
    })
}

/// Required string column of a row.
pub fn get_string(row: &RowMap, name: &str) -> Result<String, DbError> {
    let value = row.get(name).ok_or_else(|| DbError::MissingColumn {
        name: name.to_string(),
    })?;
    value.as_string().ok_or_else(|| DbError::InvalidColumn {
        name: name.to_string(),
        message: format!("expected string, found {}", value.type_name()),
    })
}

/// Nullable string column of a row. A missing column reads as null.
pub fn get_opt_string(row: &RowMap, name: &str) -> Option<String> {
    row.get(name).and_then(DatabaseValue::as_string)
}

/// Nullable integer column of a row. A missing column reads as null.
pub fn get_opt_i64(row: &RowMap, name: &str) -> Option<i64> {
    row.get(name).and_then(DatabaseValue::as_i64)
}

/// Required column parsed through `FromStr`, e.g. a status enum.
pub fn get_parsed<T>(row: &RowMap, name: &str) -> Result<T, DbError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_string(row, name)?;
    raw.parse().map_err(|e: T::Err| DbError::InvalidColumn {
        name: name.to_string(),
        message: e.to_string(),
    })
}
