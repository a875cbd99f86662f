use std::error::Error;

use serde::Serialize;

use super::LookupsCmd;
use crate::commands::{Execute, LookupKind};
use crate::db::DatabaseBackend;
use crate::queries::records;
use crate::types::{Department, Gender};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupEntry {
    pub kind: LookupKind,
    pub id: i64,
    pub name: String,
}

/// Result of the lookups command execution
#[derive(Debug, Serialize)]
pub struct LookupsResult {
    pub entries: Vec<LookupEntry>,
}

impl Execute for LookupsCmd {
    type Output = LookupsResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let wants = |kind: LookupKind| self.kind.is_none_or(|k| k == kind);
        let mut entries = Vec::new();

        if wants(LookupKind::Gender) {
            entries.extend(records::list::<Gender>(db)?.into_iter().map(|g| LookupEntry {
                kind: LookupKind::Gender,
                id: g.gender_id,
                name: g.name,
            }));
        }
        if wants(LookupKind::Department) {
            entries.extend(records::list::<Department>(db)?.into_iter().map(|d| LookupEntry {
                kind: LookupKind::Department,
                id: d.department_id,
                name: d.name,
            }));
        }

        Ok(LookupsResult { entries })
    }
}
