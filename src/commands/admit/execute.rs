use std::error::Error;

use super::AdmitCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::types::{Admission, NewAdmission};
use crate::utils::{non_blank, now_timestamp};
use crate::workflow;

impl Execute for AdmitCmd {
    type Output = Admission;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let request = NewAdmission {
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            room_id: self.room_id,
            admission_date: self.date.unwrap_or_else(now_timestamp),
            notes: non_blank(self.notes.as_deref()),
        };
        workflow::admit_patient(db, &request)
    }
}
