mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Headline counts for a day
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db dashboard                  # Today
  hospital_db dashboard --date 2024-03-01")]
pub struct DashboardCmd {
    /// Day to count appointments for, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl CommandRunner for DashboardCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
