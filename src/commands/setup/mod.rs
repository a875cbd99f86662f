mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Create database schema, optionally loading the sample data
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db setup --db ./hospital.sqlite            # Create schema
  hospital_db setup --db ./hospital.sqlite --seed     # Create schema and load sample data
  hospital_db setup --db ./hospital.sqlite --dry-run  # Show what would be created")]
pub struct SetupCmd {
    /// Load the sample data set (requires an empty database)
    #[arg(long, default_value_t = false)]
    pub seed: bool,

    /// Show what would be created without doing it
    #[arg(long, default_value_t = false, conflicts_with = "seed")]
    pub dry_run: bool,
}

impl CommandRunner for SetupCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
