mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute, LookupKind};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// List genders and departments with their ids
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db lookups                   # Both lookup relations
  hospital_db lookups --kind department # Department ids for add-doctor")]
pub struct LookupsCmd {
    /// Only this lookup relation
    #[arg(short, long, value_enum)]
    pub kind: Option<LookupKind>,
}

impl CommandRunner for LookupsCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
