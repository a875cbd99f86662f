use std::error::Error;

use super::AddDoctorCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::types::{Doctor, NewDoctor, NewRecord};
use crate::utils::non_blank;
use crate::validation::validate_doctor;

impl Execute for AddDoctorCmd {
    type Output = Doctor;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let record = NewDoctor {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender_id: self.gender_id,
            department_id: self.department_id,
            specialization: non_blank(self.specialization.as_deref()),
            contact_number: non_blank(self.phone.as_deref()),
            email: non_blank(self.email.as_deref()),
        };
        validate_doctor(&record)?;
        record.insert(db)
    }
}
