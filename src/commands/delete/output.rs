//! Output formatting for delete command results.

use super::execute::DeleteResult;
use crate::output::Outputable;

impl Outputable for DeleteResult {
    fn to_table(&self) -> String {
        format!("Deleted {} {}", self.entity.relation().name, self.id)
    }
}
