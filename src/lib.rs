//! hospital_db library - Hospital records on an embedded Cozo store
//!
//! Provides the schema and integrity layer, the admission and appointment
//! workflows, the details views and reports, and the command and output
//! infrastructure used by the `hospital_db` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;
pub mod output;
pub mod queries;
pub mod types;
pub mod utils;
pub mod validation;
pub mod workflow;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
