use std::error::Error;

use super::BookCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::types::{Appointment, NewAppointment};
use crate::workflow;

impl Execute for BookCmd {
    type Output = Appointment;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        workflow::book_appointment(
            db,
            &NewAppointment {
                patient_id: self.patient_id,
                doctor_id: self.doctor_id,
                appointment_date: self.date,
            },
        )
    }
}
