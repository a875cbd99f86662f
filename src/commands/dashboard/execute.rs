use std::error::Error;

use thiserror::Error;

use super::DashboardCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::reports::{dashboard, Dashboard};
use crate::utils::{parse_date, today, DATE_FORMAT};

#[derive(Error, Debug)]
#[error("Invalid dashboard date '{0}' (expected YYYY-MM-DD)")]
pub struct InvalidDashboardDate(String);

impl Execute for DashboardCmd {
    type Output = Dashboard;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let date = match self.date {
            Some(input) => parse_date(&input)
                .ok_or(InvalidDashboardDate(input))?
                .format(DATE_FORMAT)
                .to_string(),
            None => today(),
        };
        dashboard(db, &date)
    }
}
