mod cli_tests;
mod execute;
mod execute_tests;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Edit a registered patient
///
/// Only the given fields change. An empty value clears an optional field.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db update-patient --id 1 --email john.doe@example.com
  hospital_db update-patient --id 2 --phone 5559876543 --address '4 Oak Ave'
  hospital_db update-patient --id 3 --email ''          # Clear the email")]
pub struct UpdatePatientCmd {
    /// Patient id
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

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

impl CommandRunner for UpdatePatientCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
