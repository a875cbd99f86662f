mod execute;
mod output;

use std::error::Error;

use clap::{Args, ValueEnum};

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::queries::views::ViewName;
use crate::types::{AdmissionStatus, AppointmentStatus};

/// Status values accepted by `--status`, across both status-bearing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Scheduled,
    Completed,
    Cancelled,
    Admitted,
    Discharged,
}

impl StatusFilter {
    /// Stored status string, or `None` when `view` has no such status.
    pub fn for_view(&self, view: ViewName) -> Option<&'static str> {
        match (view, self) {
            (ViewName::Appointments, StatusFilter::Scheduled) => Some(AppointmentStatus::Scheduled.as_str()),
            (ViewName::Appointments, StatusFilter::Completed) => Some(AppointmentStatus::Completed.as_str()),
            (ViewName::Appointments, StatusFilter::Cancelled) => Some(AppointmentStatus::Cancelled.as_str()),
            (ViewName::Admissions, StatusFilter::Admitted) => Some(AdmissionStatus::Admitted.as_str()),
            (ViewName::Admissions, StatusFilter::Discharged) => Some(AdmissionStatus::Discharged.as_str()),
            _ => None,
        }
    }
}

/// Query one of the details views
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  hospital_db view --name patients                     # Every patient with gender name
  hospital_db view --name appointments --doctor-id 1   # One doctor's appointments
  hospital_db view --name admissions --status admitted # Current admissions
  hospital_db view --name doctors --search brown       # Name substring, any case")]
pub struct ViewCmd {
    /// Which view to query
    #[arg(short, long, value_enum)]
    pub name: ViewName,

    /// Only rows for this patient
    #[arg(long)]
    pub patient_id: Option<i64>,

    /// Only rows for this doctor
    #[arg(long)]
    pub doctor_id: Option<i64>,

    /// Only rows with this status (appointments, admissions)
    #[arg(long, value_enum)]
    pub status: Option<StatusFilter>,

    /// Case-insensitive substring of patient or doctor name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Maximum number of rows to return (1-1000)
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}

impl CommandRunner for ViewCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
