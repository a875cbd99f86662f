use std::error::Error;

use serde::Serialize;

use super::{SchemaCmd, SchemaDialect};
use crate::commands::Execute;
use crate::db::schema::{CozoCompiler, SqlCompiler, ALL_RELATIONS};
use crate::db::DatabaseBackend;

/// Result of the schema command execution
#[derive(Debug, Serialize)]
pub struct SchemaResult {
    pub dialect: SchemaDialect,
    pub statements: Vec<String>,
}

impl Execute for SchemaCmd {
    type Output = SchemaResult;

    /// Rendered from the schema definitions; the database is not consulted.
    fn execute(self, _db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let statements = match self.dialect {
            SchemaDialect::Cozo => CozoCompiler::compile_all(ALL_RELATIONS),
            SchemaDialect::Sql => SqlCompiler::compile_all(ALL_RELATIONS),
        };

        Ok(SchemaResult {
            dialect: self.dialect,
            statements,
        })
    }
}
