//! Database migration system for schema versioning and management.
//!
//! Provides automatic schema migration tracking and execution.
//! - Tracks schema version in the `schema_migrations` relation
//! - Runs pending migrations incrementally on setup
//! - Migrations are idempotent (safe to run multiple times)

use std::error::Error;

use tracing::{debug, info};

use crate::db::backend::{DatabaseBackend, Params};
use crate::db::schema::compilers::CozoCompiler;
use crate::db::schema::relations::{find_relation, SCHEMA_MIGRATIONS};
use crate::db::value::extract_i64;
use crate::db::{int_value, str_value};
use crate::utils::now_timestamp;

/// A set of migrations that can be applied as a unit.
///
/// Migrations are applied incrementally - only those with version > current_version
/// are executed. Each migration is idempotent.
#[derive(Debug)]
pub struct MigrationSet {
    /// Version number for this set
    pub version: i64,
    /// Human-readable description
    pub description: &'static str,
    /// Relations to create in this migration
    pub relations: &'static [&'static str],
}

/// All available migrations, indexed by version.
pub const MIGRATION_SETS: &[MigrationSet] = &[MigrationSet {
    version: 1,
    description: "Initial hospital schema with 7 relations",
    relations: &[
        "gender",
        "department",
        "patient",
        "doctor",
        "appointment",
        "room",
        "admission",
    ],
}];

/// Get the current schema version from the database.
///
/// Returns 0 if the database is not yet initialized (schema_migrations doesn't exist
/// or is empty).
pub fn get_current_version(backend: &dyn DatabaseBackend) -> Result<i64, Box<dyn Error>> {
    if !backend.relation_exists(SCHEMA_MIGRATIONS.name)? {
        return Ok(0);
    }

    let result = backend.execute_query_no_params(&CozoCompiler::compile_max_id(&SCHEMA_MIGRATIONS))?;
    Ok(result
        .rows
        .first()
        .and_then(|row| row.first())
        .map(|v| extract_i64(v, 0))
        .unwrap_or(0))
}

/// Record an applied migration.
pub fn update_version(
    backend: &dyn DatabaseBackend,
    version: i64,
    description: &str,
) -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    params.insert("version".to_string(), int_value(version));
    params.insert("description".to_string(), str_value(description));
    params.insert("applied_at".to_string(), str_value(&now_timestamp()));

    backend.execute_query(&CozoCompiler::compile_put(&SCHEMA_MIGRATIONS), &params)?;
    Ok(())
}

/// Run all pending migrations.
///
/// First ensures schema_migrations relation exists (bootstrap),
/// then determines the current schema version and applies all migrations with
/// version > current_version in order. Each migration creates its relations.
///
/// Returns the versions that were applied by this call.
pub fn run_migrations(backend: &dyn DatabaseBackend) -> Result<Vec<i64>, Box<dyn Error>> {
    backend.try_create_relation(&CozoCompiler::compile_relation(&SCHEMA_MIGRATIONS))?;

    let current_version = get_current_version(backend)?;
    let mut applied = Vec::new();

    for migration in MIGRATION_SETS.iter().filter(|m| m.version > current_version) {
        for relation_name in migration.relations {
            let relation = find_relation(relation_name)
                .ok_or(format!("Unknown relation: {}", relation_name))?;

            let created = backend.try_create_relation(&CozoCompiler::compile_relation(relation))?;
            debug!(relation = relation.name, created, "ensured relation");
        }

        update_version(backend, migration.version, migration.description)?;
        info!(
            version = migration.version,
            description = migration.description,
            "applied migration"
        );
        applied.push(migration.version);
    }

    Ok(applied)
}
