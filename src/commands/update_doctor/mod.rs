mod cli_tests;
mod execute;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Edit a registered doctor
///
/// Only the given fields change. An empty value clears an optional field.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db update-doctor --id 1 --specialization 'Interventional Cardiology'
  hospital_db update-doctor --id 3 --department-id 5
  hospital_db update-doctor --id 2 --phone ''           # Clear the phone")]
pub struct UpdateDoctorCmd {
    /// Doctor id
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

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

impl CommandRunner for UpdateDoctorCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
