use std::error::Error;

use serde::Serialize;
use tracing::info;

use super::{DeleteCmd, EntityKind};
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::records;

/// Result of the delete command execution
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub entity: EntityKind,
    pub id: i64,
}

impl Execute for DeleteCmd {
    type Output = DeleteResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        records::delete(db, self.entity.relation(), self.id)?;
        info!(relation = self.entity.relation().name, id = self.id, "deleted");
        Ok(DeleteResult {
            entity: self.entity,
            id: self.id,
        })
    }
}
