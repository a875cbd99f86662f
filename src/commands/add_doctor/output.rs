//! Output formatting for add-doctor command results.

use crate::output::{or_dash, Outputable};
use crate::types::Doctor;

impl Outputable for Doctor {
    fn to_table(&self) -> String {
        let department = self
            .department_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "Doctor {}: {}\n  Department:     {}\n  Specialization: {}",
            self.doctor_id,
            self.full_name(),
            department,
            or_dash(self.specialization.as_deref()),
        )
    }
}
