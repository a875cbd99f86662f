//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing (`mod.rs`)
//! - The result type and its `Execute` impl (`execute.rs`)
//! - Table rendering for the result (`output.rs`)

mod add_doctor;
mod add_lookup;
mod add_patient;
mod add_room;
mod admit;
mod appointment_status;
mod book;
mod dashboard;
mod delete;
mod demographics;
mod departments;
mod discharge;
mod lookups;
mod rooms;
mod schema;
mod setup;
mod update_doctor;
mod update_patient;
mod view;
mod workload;

pub use add_doctor::AddDoctorCmd;
pub use add_lookup::{AddLookupCmd, LookupKind};
pub use add_patient::AddPatientCmd;
pub use add_room::AddRoomCmd;
pub use admit::AdmitCmd;
pub use appointment_status::AppointmentStatusCmd;
pub use book::BookCmd;
pub use dashboard::DashboardCmd;
pub use delete::{DeleteCmd, EntityKind};
pub use demographics::DemographicsCmd;
pub use departments::DepartmentsCmd;
pub use discharge::DischargeCmd;
pub use lookups::LookupsCmd;
pub use rooms::RoomsCmd;
pub use schema::{SchemaCmd, SchemaDialect};
pub use setup::SetupCmd;
pub use update_doctor::UpdateDoctorCmd;
pub use update_patient::UpdatePatientCmd;
pub use view::ViewCmd;
pub use workload::WorkloadCmd;

use clap::Subcommand;
use enum_dispatch::enum_dispatch;
use std::error::Error;

use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>>;
}

/// Execute a command and render its result.
#[enum_dispatch]
pub trait CommandRunner {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[enum_dispatch(CommandRunner)]
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the schema, optionally loading sample data
    Setup(SetupCmd),

    /// Print the schema as Cozo or SQL DDL
    Schema(SchemaCmd),

    /// Add a gender or department
    AddLookup(AddLookupCmd),

    /// List genders and departments with their ids
    Lookups(LookupsCmd),

    /// Register a patient
    AddPatient(AddPatientCmd),

    /// Edit a registered patient
    UpdatePatient(UpdatePatientCmd),

    /// Register a doctor
    AddDoctor(AddDoctorCmd),

    /// Edit a registered doctor
    UpdateDoctor(UpdateDoctorCmd),

    /// Add a room (starts Available)
    AddRoom(AddRoomCmd),

    /// Book an appointment with a doctor
    Book(BookCmd),

    /// Complete or cancel an appointment
    AppointmentStatus(AppointmentStatusCmd),

    /// Admit a patient into an available room
    Admit(AdmitCmd),

    /// Discharge an admitted patient and free the room
    Discharge(DischargeCmd),

    /// Query one of the details views
    View(ViewCmd),

    /// Appointment and admission totals per doctor
    Workload(WorkloadCmd),

    /// Doctors, admitted patients and appointments per department
    Departments(DepartmentsCmd),

    /// Patient count and average age per gender
    Demographics(DemographicsCmd),

    /// Room status with current occupants
    Rooms(RoomsCmd),

    /// Headline counts for a day
    Dashboard(DashboardCmd),

    /// Delete a row that nothing references
    Delete(DeleteCmd),
}
