//! Query definition infrastructure.
//!
//! Read-side queries (views, reports) implement `QueryBuilder`: they produce a
//! CozoScript and the parameters it binds. `CompiledQuery` pairs the two for
//! execution.

use std::error::Error;

use crate::db::{DatabaseBackend, Params, QueryResult};

/// A parameterised read query.
pub trait QueryBuilder {
    /// Compile this query to a CozoScript.
    fn compile(&self) -> String;

    /// Get query parameters (name -> value pairs), bound as `$name`.
    fn parameters(&self) -> Params;
}

/// A compiled query ready for execution.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    pub script: String,
    pub params: Params,
}

impl CompiledQuery {
    /// Create a compiled query from a builder.
    pub fn from_builder(builder: &dyn QueryBuilder) -> Self {
        CompiledQuery {
            script: builder.compile(),
            params: builder.parameters(),
        }
    }

    /// Run against a backend.
    pub fn execute(&self, db: &dyn DatabaseBackend) -> Result<QueryResult, Box<dyn Error>> {
        db.execute_query(&self.script, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{int_value, open_mem_db};

    /// Minimal test QueryBuilder for testing
    struct TestQuery;

    impl QueryBuilder for TestQuery {
        fn compile(&self) -> String {
            "?[x] := x = $x".to_string()
        }

        fn parameters(&self) -> Params {
            let mut params = Params::new();
            params.insert("x".to_string(), int_value(5));
            params
        }
    }

    #[test]
    fn test_compiled_query_from_builder() {
        let compiled = CompiledQuery::from_builder(&TestQuery);
        assert_eq!(compiled.script, "?[x] := x = $x");
        assert_eq!(compiled.params.len(), 1);
    }

    #[test]
    fn test_compiled_query_execute() {
        let backend = open_mem_db().unwrap();
        let result = CompiledQuery::from_builder(&TestQuery)
            .execute(backend.as_ref())
            .unwrap();
        assert_eq!(result.rows, vec![vec![int_value(5)]]);
    }
}
