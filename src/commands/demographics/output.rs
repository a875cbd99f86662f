//! Output formatting for demographics command results.

use super::execute::DemographicsResult;
use crate::output::{render_columns, Outputable};

impl Outputable for DemographicsResult {
    fn to_table(&self) -> String {
        if self.genders.is_empty() {
            return "No genders registered.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .genders
            .iter()
            .map(|g| {
                vec![
                    g.gender.clone(),
                    g.patient_count.to_string(),
                    g.average_age.map(|age| format!("{age:.1}")).unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();

        format!(
            "Demographics as of {}\n{}",
            self.date,
            render_columns(&["Gender", "Patients", "Avg age"], &rows)
        )
    }
}
