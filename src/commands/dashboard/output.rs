//! Output formatting for dashboard command results.

use crate::output::Outputable;
use crate::queries::reports::Dashboard;

impl Outputable for Dashboard {
    fn to_table(&self) -> String {
        format!(
            "Dashboard for {}\n  Patients:           {}\n  Appointments today: {}\n  Current admissions: {}\n  Available rooms:    {}",
            self.date,
            self.total_patients,
            self.appointments_on_date,
            self.current_admissions,
            self.available_rooms,
        )
    }
}
