mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Room status with current occupants
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db rooms                      # Every room
  hospital_db rooms --available          # Rooms that can take an admission
  hospital_db rooms --room-type icu      # Type match ignores case")]
pub struct RoomsCmd {
    /// Only rooms of this type
    #[arg(short = 't', long)]
    pub room_type: Option<String>,

    /// Only rooms with status Available
    #[arg(short, long, default_value_t = false)]
    pub available: bool,
}

impl CommandRunner for RoomsCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
