use std::error::Error;

use serde::Serialize;

use super::DischargeCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::records;
use crate::types::{Admission, Room};
use crate::utils::now_timestamp;
use crate::workflow;

/// Result of the discharge command execution
#[derive(Debug, Serialize)]
pub struct DischargeResult {
    pub admission: Admission,
    pub room: Room,
}

impl Execute for DischargeCmd {
    type Output = DischargeResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let date = self.date.unwrap_or_else(now_timestamp);
        let admission = workflow::discharge_patient(db, self.id, &date)?;
        let room = records::fetch(db, admission.room_id)?;
        Ok(DischargeResult { admission, room })
    }
}
