use std::error::Error;

use serde::Serialize;

use super::RoomsCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::reports::{room_availability, RoomAvailability};
use crate::utils::non_blank;

/// Result of the rooms command execution
#[derive(Debug, Serialize)]
pub struct RoomsResult {
    pub rooms: Vec<RoomAvailability>,
}

impl Execute for RoomsCmd {
    type Output = RoomsResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let room_type = non_blank(self.room_type.as_deref());
        Ok(RoomsResult {
            rooms: room_availability(db, room_type.as_deref(), self.available)?,
        })
    }
}
