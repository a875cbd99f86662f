use std::error::Error;

use super::AddRoomCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::types::{NewRecord, NewRoom, Room};

impl Execute for AddRoomCmd {
    type Output = Room;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        NewRoom {
            room_number: self.number.trim().to_string(),
            room_type: self.room_type.trim().to_string(),
        }
        .insert(db)
    }
}
