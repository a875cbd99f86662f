mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Lookup relations with a single `name` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Gender,
    Department,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Gender => "gender",
            LookupKind::Department => "department",
        }
    }
}

/// Add a gender or department
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db add-lookup --kind gender --name Female
  hospital_db add-lookup --kind department --name Cardiology")]
pub struct AddLookupCmd {
    /// Which lookup relation to add to
    #[arg(short, long, value_enum)]
    pub kind: LookupKind,

    /// Display name
    #[arg(short, long)]
    pub name: String,
}

impl CommandRunner for AddLookupCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
