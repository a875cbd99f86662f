//! Output formatting for rooms command results.

use super::execute::RoomsResult;
use crate::output::{or_dash, render_columns, Outputable};

impl Outputable for RoomsResult {
    fn to_table(&self) -> String {
        if self.rooms.is_empty() {
            return "No matching rooms.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .rooms
            .iter()
            .map(|r| {
                vec![
                    r.room_number.clone(),
                    r.room_type.clone(),
                    r.status.to_string(),
                    or_dash(r.occupant.as_deref()).to_string(),
                ]
            })
            .collect();

        render_columns(&["Room", "Type", "Status", "Occupant"], &rows)
    }
}
