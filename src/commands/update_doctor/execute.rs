use std::error::Error;

use super::UpdateDoctorCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::records;
use crate::types::{Doctor, NewDoctor};
use crate::utils::non_blank;
use crate::validation::validate_doctor;

impl UpdateDoctorCmd {
    fn apply(&self, record: &mut NewDoctor) {
        if let Some(first_name) = &self.first_name {
            record.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = &self.last_name {
            record.last_name = last_name.trim().to_string();
        }
        if let Some(gender_id) = self.gender_id {
            record.gender_id = Some(gender_id);
        }
        if let Some(department_id) = self.department_id {
            record.department_id = Some(department_id);
        }
        if let Some(specialization) = &self.specialization {
            record.specialization = non_blank(Some(specialization));
        }
        if let Some(phone) = &self.phone {
            record.contact_number = non_blank(Some(phone));
        }
        if let Some(email) = &self.email {
            record.email = non_blank(Some(email));
        }
    }
}

impl Execute for UpdateDoctorCmd {
    type Output = Doctor;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let stored: Doctor = records::fetch(db, self.id)?;
        let mut record = NewDoctor::from(&stored);
        self.apply(&mut record);

        validate_doctor(&record)?;
        records::save(db, self.id, &record)
    }
}
