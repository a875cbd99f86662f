mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Register a patient
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db add-patient --first-name John --last-name Doe
  hospital_db add-patient --first-name Jane --last-name Smith --gender-id 2 --dob 1990-08-22
  hospital_db add-patient --first-name Ann --last-name Lee --email ann@example.com --phone 5551234567")]
pub struct AddPatientCmd {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Gender id (see `lookups --kind gender`)
    #[arg(long)]
    pub gender_id: Option<i64>,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: Option<String>,

    /// Contact number, 9-15 digits
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

impl CommandRunner for AddPatientCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
