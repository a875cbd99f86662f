use std::error::Error;

use serde::Serialize;

use super::SetupCmd;
use crate::commands::Execute;
use crate::db::schema::{run_migrations, ALL_RELATIONS};
use crate::db::DatabaseBackend;
use crate::queries::seed::{seed, SeedResult};

/// Status of a database relation (table)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RelationState {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "exists")]
    AlreadyExists,
    #[serde(rename = "would_create")]
    WouldCreate,
}

/// Status information for a single database relation
#[derive(Debug, Clone, Serialize)]
pub struct RelationStatus {
    pub name: String,
    pub status: RelationState,
}

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub relations: Vec<RelationStatus>,
    pub created_new: bool,
    pub dry_run: bool,
    pub seeded: Option<SeedResult>,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let mut existing = Vec::with_capacity(ALL_RELATIONS.len());
        for relation in ALL_RELATIONS {
            existing.push(db.relation_exists(relation.name)?);
        }

        if self.dry_run {
            let relations = ALL_RELATIONS
                .iter()
                .zip(&existing)
                .map(|(relation, exists)| RelationStatus {
                    name: relation.name.to_string(),
                    status: if *exists {
                        RelationState::AlreadyExists
                    } else {
                        RelationState::WouldCreate
                    },
                })
                .collect();

            return Ok(SetupResult {
                relations,
                created_new: false,
                dry_run: true,
                seeded: None,
            });
        }

        run_migrations(db)?;

        let relations: Vec<_> = ALL_RELATIONS
            .iter()
            .zip(&existing)
            .map(|(relation, exists)| RelationStatus {
                name: relation.name.to_string(),
                status: if *exists {
                    RelationState::AlreadyExists
                } else {
                    RelationState::Created
                },
            })
            .collect();
        let created_new = relations.iter().any(|r| r.status == RelationState::Created);

        let seeded = if self.seed { Some(seed(db)?) } else { None };

        Ok(SetupResult {
            relations,
            created_new,
            dry_run: false,
            seeded,
        })
    }
}
