mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Doctors, admitted patients and appointments per department
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db departments
  hospital_db departments --format json")]
pub struct DepartmentsCmd {}

impl CommandRunner for DepartmentsCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
