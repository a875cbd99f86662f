use std::error::Error;

use chrono::Local;

use super::UpdatePatientCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::records;
use crate::types::{NewPatient, Patient};
use crate::utils::non_blank;
use crate::validation::validate_patient;

impl UpdatePatientCmd {
    fn apply(&self, record: &mut NewPatient) {
        if let Some(first_name) = &self.first_name {
            record.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = &self.last_name {
            record.last_name = last_name.trim().to_string();
        }
        if let Some(gender_id) = self.gender_id {
            record.gender_id = Some(gender_id);
        }
        if let Some(dob) = &self.dob {
            record.date_of_birth = non_blank(Some(dob));
        }
        if let Some(phone) = &self.phone {
            record.contact_number = non_blank(Some(phone));
        }
        if let Some(email) = &self.email {
            record.email = non_blank(Some(email));
        }
        if let Some(address) = &self.address {
            record.address = non_blank(Some(address));
        }
    }
}

impl Execute for UpdatePatientCmd {
    type Output = Patient;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let stored: Patient = records::fetch(db, self.id)?;
        let mut record = NewPatient::from(&stored);
        self.apply(&mut record);

        validate_patient(&record, Local::now().date_naive())?;
        records::save(db, self.id, &record)
    }
}
