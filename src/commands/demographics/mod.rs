mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Patient count and average age per gender
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db demographics                  # Ages as of today
  hospital_db demographics --date 2024-03-01")]
pub struct DemographicsCmd {
    /// Day ages are computed on, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl CommandRunner for DemographicsCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
