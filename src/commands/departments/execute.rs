use std::error::Error;

use serde::Serialize;

use super::DepartmentsCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::reports::{department_stats, DepartmentStats};

/// Result of the departments command execution
#[derive(Debug, Serialize)]
pub struct DepartmentsResult {
    pub departments: Vec<DepartmentStats>,
}

impl Execute for DepartmentsCmd {
    type Output = DepartmentsResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(DepartmentsResult {
            departments: department_stats(db)?,
        })
    }
}
