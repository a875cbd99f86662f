//! Output formatting for add-lookup command results.

use super::execute::LookupResult;
use crate::output::Outputable;

impl Outputable for LookupResult {
    fn to_table(&self) -> String {
        format!("Added {} {}: {}", self.kind.as_str(), self.id, self.name)
    }
}
