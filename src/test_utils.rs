//! Shared test utilities for execute and query tests.
//!
//! Every helper builds a fresh in-memory database, so tests never share state.

use std::error::Error;

use crate::commands::Execute;
use crate::db::schema::run_migrations;
use crate::db::{DatabaseBackend, DatabaseConfig};
use crate::queries::seed::seed;

/// In-memory database without any relations.
pub fn empty_db() -> Box<dyn DatabaseBackend> {
    DatabaseConfig::CozoMem
        .connect()
        .expect("Failed to open in-memory database")
}

/// In-memory database with the schema created and no rows.
pub fn setup_test_db() -> Box<dyn DatabaseBackend> {
    let db = empty_db();
    run_migrations(&*db).expect("Migrations should succeed");
    db
}

/// In-memory database holding the sample data set.
///
/// Ids follow insertion order: patients John Doe (1), Jane Smith (2), Robert
/// Johnson (3); doctors Emily Brown (1), Michael Davis (2), Sarah Wilson (3);
/// rooms 101 (1), 102 (2), 201 (3), 202 (4), 301 (5). Admissions 1 and 2 hold
/// rooms 101 and 201.
pub fn seeded_db() -> Box<dyn DatabaseBackend> {
    let db = setup_test_db();
    seed(&*db).expect("Seed should succeed");
    db
}

/// Execute a command against a database and return the result.
pub fn execute_cmd<C: Execute>(cmd: C, db: &dyn DatabaseBackend) -> Result<C::Output, Box<dyn Error>> {
    cmd.execute(db)
}

/// Execute a command against a database that has no schema.
///
/// Used to verify commands fail gracefully before `setup`.
pub fn execute_on_empty_db<C: Execute>(cmd: C) -> Result<C::Output, Box<dyn Error>> {
    let db = empty_db();
    cmd.execute(&*db)
}
