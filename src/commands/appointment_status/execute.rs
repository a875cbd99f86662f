use std::error::Error;

use serde::Serialize;

use super::AppointmentStatusCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::records;
use crate::types::{Appointment, AppointmentStatus};
use crate::workflow;

/// Result of the appointment-status command execution
#[derive(Debug, Serialize)]
pub struct StatusChangeResult {
    pub previous: AppointmentStatus,
    pub appointment: Appointment,
}

impl Execute for AppointmentStatusCmd {
    type Output = StatusChangeResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let before: Appointment = records::fetch(db, self.id)?;
        let appointment = workflow::set_appointment_status(db, self.id, self.status)?;
        Ok(StatusChangeResult {
            previous: before.status,
            appointment,
        })
    }
}
