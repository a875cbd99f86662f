use std::error::Error;

use chrono::Local;

use super::AddPatientCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::types::{NewPatient, NewRecord, Patient};
use crate::utils::non_blank;
use crate::validation::validate_patient;

impl AddPatientCmd {
    fn to_record(&self) -> NewPatient {
        NewPatient {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender_id: self.gender_id,
            date_of_birth: non_blank(self.dob.as_deref()),
            contact_number: non_blank(self.phone.as_deref()),
            email: non_blank(self.email.as_deref()),
            address: non_blank(self.address.as_deref()),
        }
    }
}

impl Execute for AddPatientCmd {
    type Output = Patient;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let record = self.to_record();
        validate_patient(&record, Local::now().date_naive())?;
        record.insert(db)
    }
}
