//! Output formatting for admissions.

use crate::output::{or_dash, Outputable};
use crate::types::Admission;

impl Outputable for Admission {
    fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "Admission {}: patient {} in room {} under doctor {} [{}]",
            self.admission_id, self.patient_id, self.room_id, self.doctor_id, self.status
        )];
        lines.push(format!("  Admitted:   {}", self.admission_date));
        lines.push(format!("  Discharged: {}", or_dash(self.discharge_date.as_deref())));
        if let Some(notes) = &self.notes {
            lines.push(format!("  Notes:      {}", notes));
        }
        lines.join("\n")
    }
}
