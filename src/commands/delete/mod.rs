mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::commands::{CommandRunner, Execute};
use crate::db::schema::{
    SchemaRelation, ADMISSION, APPOINTMENT, DEPARTMENT, DOCTOR, GENDER, PATIENT, ROOM,
};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Base relations that rows can be deleted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Gender,
    Department,
    Patient,
    Doctor,
    Appointment,
    Room,
    Admission,
}

impl EntityKind {
    pub fn relation(&self) -> &'static SchemaRelation {
        match self {
            EntityKind::Gender => &GENDER,
            EntityKind::Department => &DEPARTMENT,
            EntityKind::Patient => &PATIENT,
            EntityKind::Doctor => &DOCTOR,
            EntityKind::Appointment => &APPOINTMENT,
            EntityKind::Room => &ROOM,
            EntityKind::Admission => &ADMISSION,
        }
    }
}

/// Delete a row that nothing references
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db delete --entity appointment --id 3
  hospital_db delete --entity room --id 5

Rows still referenced elsewhere are kept; delete the referencing rows first.")]
pub struct DeleteCmd {
    #[arg(short, long, value_enum)]
    pub entity: EntityKind,

    #[arg(long)]
    pub id: i64,
}

impl CommandRunner for DeleteCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
