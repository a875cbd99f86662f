mod execute;
mod output;
mod output_tests;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Appointment and admission totals per doctor
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db workload               # Every doctor
  hospital_db workload --doctor-id 2 # One doctor")]
pub struct WorkloadCmd {
    /// Only this doctor
    #[arg(short, long)]
    pub doctor_id: Option<i64>,
}

impl CommandRunner for WorkloadCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
