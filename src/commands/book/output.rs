//! Output formatting for appointments.

use crate::output::Outputable;
use crate::types::Appointment;

impl Outputable for Appointment {
    fn to_table(&self) -> String {
        format!(
            "Appointment {}: patient {} with doctor {} at {} [{}]",
            self.appointment_id, self.patient_id, self.doctor_id, self.appointment_date, self.status
        )
    }
}
