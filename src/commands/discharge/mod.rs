mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Discharge an admitted patient and free the room
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db discharge --id 1
  hospital_db discharge --id 2 --date '2024-03-06 10:00'")]
pub struct DischargeCmd {
    /// Admission id
    #[arg(long)]
    pub id: i64,

    /// Discharge time, defaults to now
    #[arg(long)]
    pub date: Option<String>,
}

impl CommandRunner for DischargeCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
