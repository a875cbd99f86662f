mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Admit a patient into an available room
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db admit --patient-id 2 --doctor-id 1 --room-id 2
  hospital_db admit -p 2 -d 1 -r 4 --date '2024-03-04 18:30' --notes 'Observation'

The room must be Available; it is marked Occupied in the same transaction.")]
pub struct AdmitCmd {
    #[arg(short, long)]
    pub patient_id: i64,

    /// Attending doctor
    #[arg(short, long)]
    pub doctor_id: i64,

    #[arg(short, long)]
    pub room_id: i64,

    /// Admission time, defaults to now
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl CommandRunner for AdmitCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
