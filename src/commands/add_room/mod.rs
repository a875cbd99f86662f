mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Add a room (starts Available)
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db add-room --number 401 --room-type ICU")]
pub struct AddRoomCmd {
    /// Room number as shown on the door
    #[arg(short, long)]
    pub number: String,

    /// Free-form type, e.g. General, ICU, Private
    #[arg(short = 't', long)]
    pub room_type: String,
}

impl CommandRunner for AddRoomCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
