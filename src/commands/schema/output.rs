//! Output formatting for schema command results.

use super::execute::SchemaResult;
use crate::output::Outputable;

impl Outputable for SchemaResult {
    /// Statements separated by blank lines, ready to save as a script.
    fn to_table(&self) -> String {
        self.statements.join("\n\n")
    }
}
