//! Output formatting for discharge command results.

use super::execute::DischargeResult;
use crate::output::{or_dash, Outputable};

impl Outputable for DischargeResult {
    fn to_table(&self) -> String {
        format!(
            "Discharged admission {} at {}\nRoom {} is now {}",
            self.admission.admission_id,
            or_dash(self.admission.discharge_date.as_deref()),
            self.room.room_number,
            self.room.status,
        )
    }
}
