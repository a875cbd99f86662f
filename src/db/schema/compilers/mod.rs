//! Database schema compilers.
//!
//! Generates backend-specific statements from backend-agnostic schema definitions.
//! `CozoCompiler` produces the DDL and scripts actually executed; `SqlCompiler`
//! produces portable SQL for export.

pub mod cozo;
pub mod sql;

pub use cozo::CozoCompiler;
pub use sql::SqlCompiler;
