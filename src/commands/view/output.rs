//! Output formatting for view command results.

use super::execute::{ViewResult, ViewRows};
use crate::output::{or_dash, render_columns, Outputable};

fn cell(value: &Option<String>) -> String {
    or_dash(value.as_deref()).to_string()
}

impl ViewRows {
    fn columns(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        match self {
            ViewRows::Patients(rows) => (
                vec!["ID", "Name", "Gender", "Born", "Phone", "Email"],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.patient_id.to_string(),
                            r.patient_name.clone(),
                            cell(&r.gender),
                            cell(&r.date_of_birth),
                            cell(&r.contact_number),
                            cell(&r.email),
                        ]
                    })
                    .collect(),
            ),
            ViewRows::Doctors(rows) => (
                vec!["ID", "Name", "Gender", "Department", "Specialization"],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.doctor_id.to_string(),
                            r.doctor_name.clone(),
                            cell(&r.gender),
                            cell(&r.department),
                            cell(&r.specialization),
                        ]
                    })
                    .collect(),
            ),
            ViewRows::Appointments(rows) => (
                vec!["ID", "Date", "Patient", "Doctor", "Department", "Status"],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.appointment_id.to_string(),
                            r.appointment_date.clone(),
                            r.patient_name.clone(),
                            r.doctor_name.clone(),
                            cell(&r.department),
                            r.status.to_string(),
                        ]
                    })
                    .collect(),
            ),
            ViewRows::Admissions(rows) => (
                vec!["ID", "Patient", "Doctor", "Room", "Admitted", "Discharged", "Status"],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.admission_id.to_string(),
                            r.patient_name.clone(),
                            r.doctor_name.clone(),
                            format!("{} ({})", r.room_number, r.room_type),
                            r.admission_date.clone(),
                            cell(&r.discharge_date),
                            r.status.to_string(),
                        ]
                    })
                    .collect(),
            ),
        }
    }
}

impl Outputable for ViewResult {
    fn to_table(&self) -> String {
        if self.rows.is_empty() {
            return format!("{}: no rows", self.view);
        }

        let (headers, rows) = self.rows.columns();
        format!(
            "{} ({} rows)\n\n{}",
            self.view,
            rows.len(),
            render_columns(&headers, &rows)
        )
    }
}
