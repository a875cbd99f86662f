//! Data access for the hospital relations.
//!
//! - `records`: checked inserts, updates and deletes over any base relation
//! - `integrity`: foreign key, required field and restrict-on-delete checks
//! - `views`: the four `*_details` projections
//! - `reports`: workload, room availability and dashboard counts
//! - `seed`: demonstration data

pub mod builder;
pub mod integrity;
pub mod records;
pub mod reports;
pub mod seed;
pub mod views;
