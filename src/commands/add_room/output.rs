//! Output formatting for add-room command results.

use crate::output::Outputable;
use crate::types::Room;

impl Outputable for Room {
    fn to_table(&self) -> String {
        format!(
            "Room {} ({}): {} [{}]",
            self.room_number, self.room_id, self.room_type, self.status
        )
    }
}
