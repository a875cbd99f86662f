use std::error::Error;

use serde::Serialize;

use super::{AddLookupCmd, LookupKind};
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::types::{NewDepartment, NewGender, NewRecord};

/// Result of the add-lookup command execution
#[derive(Debug, Serialize)]
pub struct LookupResult {
    pub kind: LookupKind,
    pub id: i64,
    pub name: String,
}

impl Execute for AddLookupCmd {
    type Output = LookupResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let name = self.name.trim().to_string();
        let (id, name) = match self.kind {
            LookupKind::Gender => {
                let stored = NewGender { name }.insert(db)?;
                (stored.gender_id, stored.name)
            }
            LookupKind::Department => {
                let stored = NewDepartment { name }.insert(db)?;
                (stored.department_id, stored.name)
            }
        };

        Ok(LookupResult {
            kind: self.kind,
            id,
            name,
        })
    }
}
