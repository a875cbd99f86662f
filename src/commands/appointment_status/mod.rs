mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::types::AppointmentStatus;

/// Complete or cancel an appointment
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db appointment-status --id 1 --status completed
  hospital_db appointment-status --id 2 --status cancelled

Only scheduled appointments can change status.")]
pub struct AppointmentStatusCmd {
    /// Appointment id
    #[arg(long)]
    pub id: i64,

    #[arg(short, long, value_enum)]
    pub status: AppointmentStatus,
}

impl CommandRunner for AppointmentStatusCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
