//! Output formatting for appointment-status command results.

use super::execute::StatusChangeResult;
use crate::output::Outputable;

impl Outputable for StatusChangeResult {
    fn to_table(&self) -> String {
        if self.previous == self.appointment.status {
            format!(
                "Appointment {} is already {}",
                self.appointment.appointment_id, self.appointment.status
            )
        } else {
            format!(
                "Appointment {}: {} -> {}",
                self.appointment.appointment_id, self.previous, self.appointment.status
            )
        }
    }
}
