//! Output formatting for departments command results.

use super::execute::DepartmentsResult;
use crate::output::{render_columns, Outputable};

impl Outputable for DepartmentsResult {
    fn to_table(&self) -> String {
        if self.departments.is_empty() {
            return "No departments registered.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .departments
            .iter()
            .map(|d| {
                vec![
                    d.department_id.to_string(),
                    d.department.clone(),
                    d.doctor_count.to_string(),
                    d.patient_count.to_string(),
                    d.appointment_count.to_string(),
                ]
            })
            .collect();

        render_columns(&["ID", "Department", "Doctors", "Patients", "Appts"], &rows)
    }
}
