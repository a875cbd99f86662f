mod execute;
mod output;

use std::error::Error;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// DDL flavour to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaDialect {
    /// Cozo `:create` statements
    #[default]
    Cozo,
    /// Portable SQL tables and views
    Sql,
}

/// Print the schema as DDL
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db schema                    # Cozo :create statements
  hospital_db schema --dialect sql      # CREATE TABLE / CREATE VIEW for a SQL engine
  hospital_db schema --dialect sql > migrations/001_hospital.sql")]
pub struct SchemaCmd {
    /// DDL dialect
    #[arg(long, value_enum, default_value_t = SchemaDialect::Cozo)]
    pub dialect: SchemaDialect,
}

impl CommandRunner for SchemaCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
