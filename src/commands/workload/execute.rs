use std::error::Error;

use serde::Serialize;

use super::WorkloadCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::reports::{doctor_workload, DoctorWorkload};

/// Result of the workload command execution
#[derive(Debug, Serialize)]
pub struct WorkloadResult {
    pub doctors: Vec<DoctorWorkload>,
}

impl Execute for WorkloadCmd {
    type Output = WorkloadResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(WorkloadResult {
            doctors: doctor_workload(db, self.doctor_id)?,
        })
    }
}
