//! Output formatting for workload command results.

use super::execute::WorkloadResult;
use crate::output::{or_dash, render_columns, Outputable};

impl Outputable for WorkloadResult {
    fn to_table(&self) -> String {
        if self.doctors.is_empty() {
            return "No doctors registered.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .doctors
            .iter()
            .map(|w| {
                vec![
                    w.doctor_id.to_string(),
                    w.doctor_name.clone(),
                    or_dash(w.department.as_deref()).to_string(),
                    w.total_appointments.to_string(),
                    w.completed_appointments.to_string(),
                    format!("{:.1}%", w.completion_rate),
                    w.unique_patients.to_string(),
                    w.current_admissions.to_string(),
                ]
            })
            .collect();

        render_columns(
            &["ID", "Doctor", "Department", "Appts", "Done", "Rate", "Patients", "Admitted"],
            &rows,
        )
    }
}
