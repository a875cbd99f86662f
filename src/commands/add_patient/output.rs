//! Output formatting for add-patient command results.

use crate::output::{or_dash, Outputable};
use crate::types::Patient;

impl Outputable for Patient {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("Patient {}: {}", self.patient_id, self.full_name()));
        lines.push(format!("  Born:    {}", or_dash(self.date_of_birth.as_deref())));
        lines.push(format!("  Phone:   {}", or_dash(self.contact_number.as_deref())));
        lines.push(format!("  Email:   {}", or_dash(self.email.as_deref())));
        lines.push(format!("  Created: {}", self.created_date));
        lines.join("\n")
    }
}
