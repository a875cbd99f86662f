//! Trait abstraction for database values.
//!
//! `DatabaseValue` abstracts the engine's cell type so that row decoding in the
//! data-access layer does not pattern-match on `cozo::DataValue` everywhere.

use std::fmt::Debug;

use cozo::{DataValue, Num};

/// Trait for database values that can be extracted to Rust types.
pub trait DatabaseValue: Clone + Debug {
    /// Extract as String if the value is string-like.
    ///
    /// Returns `None` if the value is null or not a string.
    fn as_string(&self) -> Option<String>;

    /// Extract as i64 if the value is an integer.
    fn as_i64(&self) -> Option<i64>;

    /// Extract as f64 if the value is numeric.
    fn as_f64(&self) -> Option<f64>;

    /// True when the cell holds SQL-style null.
    fn is_null(&self) -> bool;

    /// Get type name for error messages.
    fn type_name(&self) -> &'static str;

    /// Extract as i64 with a default value.
    fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    /// Extract as String with a default value.
    fn as_string_or(&self, default: &str) -> String {
        self.as_string().unwrap_or_else(|| default.to_string())
    }
}

impl DatabaseValue for DataValue {
    fn as_string(&self) -> Option<String> {
        match self {
            DataValue::Str(s) => Some(s.to_string()),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Num(Num::Int(i)) => Some(*i),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Num(Num::Int(i)) => Some(*i as f64),
            DataValue::Num(Num::Float(f)) => Some(*f),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "bool",
            DataValue::Num(Num::Int(_)) => "int",
            DataValue::Num(Num::Float(_)) => "float",
            DataValue::Str(_) => "string",
            _ => "other",
        }
    }
}

// DataValue extraction helpers

/// Extract a String from a DataValue, returning None if not a string
pub fn extract_string(value: &DataValue) -> Option<String> {
    value.as_string()
}

/// Extract a String from a DataValue, returning the default if not a string
pub fn extract_string_or(value: &DataValue, default: &str) -> String {
    value.as_string_or(default)
}

/// Extract an i64 from a DataValue, returning the default if not an integer
pub fn extract_i64(value: &DataValue, default: i64) -> i64 {
    value.as_i64_or(default)
}

/// Extract a nullable string column.
pub fn extract_opt_string(value: Option<&DataValue>) -> Option<String> {
    value.and_then(DatabaseValue::as_string)
}

/// Extract a nullable integer column.
pub fn extract_opt_i64(value: Option<&DataValue>) -> Option<i64> {
    value.and_then(DatabaseValue::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datavalue_as_string() {
        let val = DataValue::Str("Cardiology".into());
        assert_eq!(val.as_string(), Some("Cardiology".to_string()));
    }

    #[test]
    fn test_datavalue_as_string_null() {
        assert_eq!(DataValue::Null.as_string(), None);
        assert!(DataValue::Null.is_null());
    }

    #[test]
    fn test_datavalue_as_i64() {
        let val = DataValue::Num(Num::Int(42));
        assert_eq!(val.as_i64(), Some(42));
        assert_eq!(val.as_f64(), Some(42.0));
        assert_eq!(DataValue::Str("42".into()).as_i64(), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(DataValue::Null.type_name(), "null");
        assert_eq!(DataValue::Num(Num::Int(1)).type_name(), "int");
        assert_eq!(DataValue::Num(Num::Float(1.5)).type_name(), "float");
        assert_eq!(DataValue::Str("x".into()).type_name(), "string");
        assert_eq!(DataValue::Bool(true).type_name(), "bool");
    }

    #[test]
    fn test_extract_helpers_defaults() {
        assert_eq!(extract_i64(&DataValue::Null, 7), 7);
        assert_eq!(extract_string_or(&DataValue::Null, "n/a"), "n/a");
        assert_eq!(extract_opt_string(None), None);
        assert_eq!(extract_opt_i64(Some(&DataValue::Num(Num::Int(3)))), Some(3));
    }
}
