//! Database backend trait for abstracting the storage engine.
//!
//! The hospital schema only needs a small surface from the engine: run a script
//! with bound parameters, check whether a relation exists, and create relations
//! idempotently. Everything else (integrity checks, views, workflows) is built on
//! top of this trait.

use std::collections::BTreeMap;
use std::error::Error;

use cozo::DataValue;

/// Type alias for query parameters.
pub type Params = BTreeMap<String, DataValue>;

/// Result of a query execution.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<DataValue>>,
}

impl QueryResult {
    /// Position of a named column in the result headers.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows keyed by column name.
    pub fn row_maps(&self) -> Vec<BTreeMap<String, DataValue>> {
        self.rows
            .iter()
            .map(|row| super::query::row_map(&self.headers, row))
            .collect()
    }
}

/// Trait for database backends that can execute queries.
pub trait DatabaseBackend: Send + Sync {
    /// Execute a script with parameters, returning raw rows.
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, Box<dyn Error>>;

    /// Execute a script without parameters.
    fn execute_query_no_params(&self, script: &str) -> Result<QueryResult, Box<dyn Error>> {
        self.execute_query(script, &Params::new())
    }

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Check if a relation (table) exists.
    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>>;

    /// Create a relation if it doesn't exist.
    /// Returns true if created, false if already existed.
    fn try_create_relation(&self, ddl: &str) -> Result<bool, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozo::Num;

    #[test]
    fn test_query_result_column_index() {
        let result = QueryResult {
            headers: vec!["patient_id".to_string(), "first_name".to_string()],
            rows: vec![vec![DataValue::Num(Num::Int(1)), DataValue::Str("Ada".into())]],
        };

        assert_eq!(result.column_index("first_name"), Some(1));
        assert_eq!(result.column_index("email"), None);
        assert!(!result.is_empty());

        let maps = result.row_maps();
        assert_eq!(maps[0].get("first_name"), Some(&DataValue::Str("Ada".into())));
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn accepts_backend(_db: &dyn DatabaseBackend) {}
        let _ = accepts_backend;
    }
}
