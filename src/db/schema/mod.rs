//! Backend-agnostic database schema definitions.
//!
//! This module provides structured definitions for the hospital schema, so that
//! Cozo DDL, portable SQL DDL and the integrity checks all derive from a single
//! source of truth.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `DataType` - String, Int, Float, Bool
//!    - `SchemaField` - name, type, nullability, optional default, allowed values
//!    - `ForeignKey` - column referencing another relation's key
//!    - `SchemaRelation` - key fields, value fields and foreign keys
//!
//! 2. **Relation Definitions** (`relations.rs`):
//!    - `GENDER`, `DEPARTMENT`, `PATIENT`, `DOCTOR`, `APPOINTMENT`, `ROOM`, `ADMISSION`
//!    - `ALL_RELATIONS` - the seven base relations, referenced relations first
//!
//! 3. **Compilers** (`compilers/`): Cozo scripts and SQL DDL.
//!
//! 4. **Migrations** (`migrations.rs`): versioned, idempotent relation creation.
//!
//! # Type Mapping
//!
//! | Rust Type | Cozo Type | SQL Type |
//! |-----------|-----------|----------|
//! | String | String | TEXT |
//! | Int | Int | INTEGER |
//! | Float | Float | REAL |
//! | Bool | Bool | BOOLEAN |
//!
//! Nullable columns render as `Type?` in Cozo and without `NOT NULL` in SQL.

pub mod compilers;
mod definition;
pub mod migrations;
mod relations;

pub use compilers::{CozoCompiler, SqlCompiler};
pub use definition::{DataType, DefaultValue, ForeignKey, SchemaField, SchemaRelation};
pub use migrations::run_migrations;
pub use relations::{
    find_relation, ADMISSION, ADMISSION_STATUSES, ALL_RELATIONS, APPOINTMENT, APPOINTMENT_STATUSES,
    DEPARTMENT, DOCTOR, GENDER, PATIENT, ROOM, ROOM_STATUSES, SCHEMA_MIGRATIONS,
};
