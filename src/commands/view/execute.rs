use std::error::Error;

use serde::Serialize;
use thiserror::Error;

use super::{StatusFilter, ViewCmd};
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::views::{
    admission_details, appointment_details, doctor_details, patient_details, AdmissionDetails,
    AppointmentDetails, DoctorDetails, PatientDetails, ViewFilter, ViewName,
};
use crate::utils::non_blank;

#[derive(Error, Debug)]
#[error("Status {status:?} does not apply to {view}")]
pub struct StatusMismatch {
    pub view: ViewName,
    pub status: StatusFilter,
}

/// Rows of one view, serialized as a plain array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ViewRows {
    Patients(Vec<PatientDetails>),
    Doctors(Vec<DoctorDetails>),
    Appointments(Vec<AppointmentDetails>),
    Admissions(Vec<AdmissionDetails>),
}

impl ViewRows {
    pub fn len(&self) -> usize {
        match self {
            ViewRows::Patients(rows) => rows.len(),
            ViewRows::Doctors(rows) => rows.len(),
            ViewRows::Appointments(rows) => rows.len(),
            ViewRows::Admissions(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of the view command execution
#[derive(Debug, Serialize)]
pub struct ViewResult {
    pub view: ViewName,
    pub rows: ViewRows,
}

impl ViewCmd {
    fn filter(&self) -> Result<ViewFilter, StatusMismatch> {
        let status = match self.status {
            Some(status) => Some(
                status
                    .for_view(self.name)
                    .ok_or(StatusMismatch { view: self.name, status })?
                    .to_string(),
            ),
            None => None,
        };

        Ok(ViewFilter {
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            status,
            name: non_blank(self.search.as_deref()),
            limit: Some(self.limit),
        })
    }
}

impl Execute for ViewCmd {
    type Output = ViewResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let filter = self.filter()?;
        let rows = match self.name {
            ViewName::Patients => ViewRows::Patients(patient_details(db, &filter)?),
            ViewName::Doctors => ViewRows::Doctors(doctor_details(db, &filter)?),
            ViewName::Appointments => ViewRows::Appointments(appointment_details(db, &filter)?),
            ViewName::Admissions => ViewRows::Admissions(admission_details(db, &filter)?),
        };

        Ok(ViewResult {
            view: self.name,
            rows,
        })
    }
}
