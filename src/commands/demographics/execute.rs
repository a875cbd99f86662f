use std::error::Error;

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use super::DemographicsCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::reports::{gender_demographics, GenderDemographics};
use crate::utils::{parse_date, DATE_FORMAT};

#[derive(Error, Debug)]
#[error("Invalid demographics date '{0}' (expected YYYY-MM-DD)")]
pub struct InvalidDemographicsDate(String);

/// Result of the demographics command execution
#[derive(Debug, Serialize)]
pub struct DemographicsResult {
    pub date: String,
    pub genders: Vec<GenderDemographics>,
}

impl Execute for DemographicsCmd {
    type Output = DemographicsResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let date = match self.date {
            Some(input) => parse_date(&input).ok_or(InvalidDemographicsDate(input))?,
            None => Local::now().date_naive(),
        };

        Ok(DemographicsResult {
            date: date.format(DATE_FORMAT).to_string(),
            genders: gender_demographics(db, date)?,
        })
    }
}
