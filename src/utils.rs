//! Utility functions shared by queries and commands.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Storage format of timestamps (`created_date`, appointment and admission dates).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage format of calendar dates (`date_of_birth`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted input layouts for timestamps, tried in order.
const TIMESTAMP_INPUTS: &[&str] = &[TIMESTAMP_FORMAT, "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Current local time in storage format.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Today's local date in storage format.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Parse a timestamp in any accepted layout. A bare date means midnight.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    TIMESTAMP_INPUTS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| parse_date(input).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Re-render a timestamp in storage format.
pub fn normalize_timestamp(input: &str) -> Option<String> {
    parse_timestamp(input).map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
}

/// The calendar hour a timestamp falls in, e.g. `2024-03-01 09`.
pub fn hour_slot(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H").to_string()
}

/// Trimmed text, or `None` when absent or blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Builder for optional query conditions (status, patient, name filters)
///
/// Handles the pattern of generating conditions only when values are present.
/// Substring conditions match case-insensitively.
pub struct OptionalConditionBuilder {
    field_name: String,
    param_name: String,
    with_leading_comma: bool,
    substring: bool,
}

impl OptionalConditionBuilder {
    /// Creates a new optional condition builder
    ///
    /// # Arguments
    /// * `field_name` - The bound variable name in the query
    /// * `param_name` - The parameter name
    pub fn new(field_name: &str, param_name: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            param_name: param_name.to_string(),
            with_leading_comma: false,
            substring: false,
        }
    }

    /// Match when the parameter occurs anywhere in the field, ignoring case.
    ///
    /// The parameter value must already be lowercase.
    pub fn with_substring(mut self) -> Self {
        self.substring = true;
        self
    }

    /// Adds a leading comma
    pub fn with_leading_comma(mut self) -> Self {
        self.with_leading_comma = true;
        self
    }

    /// Builds the condition string, or an empty string if no value is present.
    pub fn build(&self, has_value: bool) -> String {
        if !has_value {
            return String::new();
        }

        let prefix = if self.with_leading_comma { ", " } else { "" };
        if self.substring {
            format!(
                "{}str_includes(lowercase({}), ${})",
                prefix, self.field_name, self.param_name
            )
        } else {
            format!("{}{} == ${}", prefix, self.field_name, self.param_name)
        }
    }
}
