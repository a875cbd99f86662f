//! Output formatting for lookups command results.

use super::execute::LookupsResult;
use crate::output::{render_columns, Outputable};

impl Outputable for LookupsResult {
    fn to_table(&self) -> String {
        if self.entries.is_empty() {
            return "No lookup values. Add some with add-lookup.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .entries
            .iter()
            .map(|e| vec![e.kind.as_str().to_string(), e.id.to_string(), e.name.clone()])
            .collect();

        render_columns(&["Kind", "ID", "Name"], &rows)
    }
}
