mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Register a doctor
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db add-doctor --first-name Emily --last-name Brown --department-id 1
  hospital_db add-doctor --first-name Sam --last-name Ortiz --specialization 'Sports Medicine'")]
pub struct AddDoctorCmd {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Gender id (see `lookups --kind gender`)
    #[arg(long)]
    pub gender_id: Option<i64>,

    /// Department id (see `lookups --kind department`)
    #[arg(long)]
    pub department_id: Option<i64>,

    #[arg(long)]
    pub specialization: Option<String>,

    /// Contact number, 9-15 digits
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

impl CommandRunner for AddDoctorCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
