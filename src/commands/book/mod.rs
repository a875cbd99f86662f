mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Book an appointment with a doctor
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db book --patient-id 1 --doctor-id 2 --date '2024-03-05 11:00'
  hospital_db book -p 3 -d 1 --date 2024-03-05T15:30

A doctor takes at most one non-cancelled appointment per clock hour.")]
pub struct BookCmd {
    #[arg(short, long)]
    pub patient_id: i64,

    #[arg(short, long)]
    pub doctor_id: i64,

    /// Appointment time, YYYY-MM-DD HH:MM[:SS]
    #[arg(long)]
    pub date: String,
}

impl CommandRunner for BookCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
