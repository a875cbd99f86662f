//! Referential-integrity and column checks.
//!
//! The engine stores typed columns but knows nothing about foreign keys, required
//! text or closed value sets. These checks run before every write issued by
//! `records`, using the schema metadata as the source of truth.

use std::error::Error;

use cozo::DataValue;
use thiserror::Error;
use tracing::warn;

use crate::db::schema::{CozoCompiler, DataType, SchemaField, SchemaRelation, ALL_RELATIONS};
use crate::db::{int_value, DatabaseBackend, DatabaseValue, Params, RowMap};

/// A write that would break the integrity contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    #[error("{relation}.{field} is required")]
    MissingField { relation: String, field: String },

    #[error("{relation}.{field} = {value} references a missing {target} row")]
    ForeignKey {
        relation: String,
        field: String,
        target: String,
        value: i64,
    },

    #[error("{relation}.{field} expects {expected}, got {found}")]
    TypeMismatch {
        relation: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("{relation}.{field} must be one of {allowed}, got '{value}'")]
    CheckFailed {
        relation: String,
        field: String,
        value: String,
        allowed: String,
    },

    #[error("{relation} has no column '{field}'")]
    UnknownField { relation: String, field: String },

    #[error("Cannot delete {relation} {id}: still referenced by {referenced_by}")]
    Restricted {
        relation: String,
        id: i64,
        referenced_by: String,
    },

    #[error("{relation} {id} not found")]
    NotFound { relation: String, id: i64 },
}

impl ConstraintViolation {
    pub fn not_found(relation: &SchemaRelation, id: i64) -> Self {
        Self::NotFound {
            relation: relation.name.to_string(),
            id,
        }
    }
}

/// Check a complete value-column set against required, type, allowed-value and
/// foreign-key rules, in that order.
pub fn check_row(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    values: &RowMap,
) -> Result<(), Box<dyn Error>> {
    check_known_fields(relation, values)?;

    for field in relation.value_fields {
        let value = values.get(field.name).unwrap_or(&DataValue::Null);
        check_field(relation, field, value)?;
    }

    for fk in relation.foreign_keys {
        let Some(target_id) = values.get(fk.field).and_then(DatabaseValue::as_i64) else {
            continue;
        };
        let target = ALL_RELATIONS
            .iter()
            .find(|r| r.name == fk.target)
            .ok_or(format!("Unknown relation: {}", fk.target))?;

        if !row_exists(db, target, target_id)? {
            let violation = ConstraintViolation::ForeignKey {
                relation: relation.name.to_string(),
                field: fk.field.to_string(),
                target: fk.target.to_string(),
                value: target_id,
            };
            warn!(%violation, "rejected write");
            return Err(violation.into());
        }
    }

    Ok(())
}

fn check_known_fields(relation: &SchemaRelation, values: &RowMap) -> Result<(), ConstraintViolation> {
    match values.keys().find(|name| relation.field(name.as_str()).is_none()) {
        Some(name) => Err(ConstraintViolation::UnknownField {
            relation: relation.name.to_string(),
            field: name.clone(),
        }),
        None => Ok(()),
    }
}

/// Check one column value in isolation.
pub fn check_field(
    relation: &SchemaRelation,
    field: &SchemaField,
    value: &DataValue,
) -> Result<(), ConstraintViolation> {
    let missing = || ConstraintViolation::MissingField {
        relation: relation.name.to_string(),
        field: field.name.to_string(),
    };

    if value.is_null() {
        return if field.nullable { Ok(()) } else { Err(missing()) };
    }

    if !type_matches(field.data_type, value) {
        return Err(ConstraintViolation::TypeMismatch {
            relation: relation.name.to_string(),
            field: field.name.to_string(),
            expected: field.data_type.cozo_type().to_string(),
            found: value.type_name().to_string(),
        });
    }

    if let Some(text) = value.as_string() {
        if !field.nullable && text.trim().is_empty() {
            return Err(missing());
        }
        if !field.allowed.is_empty() && !field.allowed.contains(&text.as_str()) {
            return Err(ConstraintViolation::CheckFailed {
                relation: relation.name.to_string(),
                field: field.name.to_string(),
                value: text,
                allowed: field.allowed.join(", "),
            });
        }
    }

    Ok(())
}

fn type_matches(data_type: DataType, value: &DataValue) -> bool {
    match data_type {
        DataType::String => matches!(value, DataValue::Str(_)),
        DataType::Int => value.as_i64().is_some(),
        DataType::Float => value.as_f64().is_some(),
        DataType::Bool => matches!(value, DataValue::Bool(_)),
    }
}

/// Whether a row with this id exists.
pub fn row_exists(db: &dyn DatabaseBackend, relation: &SchemaRelation, id: i64) -> Result<bool, Box<dyn Error>> {
    let mut params = Params::new();
    params.insert("id".to_string(), int_value(id));
    let result = db.execute_query(&CozoCompiler::compile_select_by_id(relation), &params)?;
    Ok(!result.is_empty())
}

/// Relations holding rows that reference `id`, with their row counts.
pub fn referencing_rows(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    id: i64,
) -> Result<Vec<(&'static str, usize)>, Box<dyn Error>> {
    let mut params = Params::new();
    params.insert("id".to_string(), int_value(id));

    let mut found = Vec::new();
    for source in ALL_RELATIONS {
        for fk in source.foreign_keys.iter().filter(|fk| fk.target == relation.name) {
            let result = db.execute_query(&CozoCompiler::compile_referencing(source, fk), &params)?;
            if !result.is_empty() {
                found.push((source.name, result.rows.len()));
            }
        }
    }
    Ok(found)
}

/// Restrict policy: a row may only be deleted once nothing references it.
pub fn check_delete(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    id: i64,
) -> Result<(), Box<dyn Error>> {
    if !row_exists(db, relation, id)? {
        return Err(ConstraintViolation::not_found(relation, id).into());
    }

    let references = referencing_rows(db, relation, id)?;
    if references.is_empty() {
        return Ok(());
    }

    let referenced_by = references
        .iter()
        .map(|(name, count)| format!("{} ({} rows)", name, count))
        .collect::<Vec<_>>()
        .join(", ");
    let violation = ConstraintViolation::Restricted {
        relation: relation.name.to_string(),
        id,
        referenced_by,
    };
    warn!(%violation, "rejected delete");
    Err(violation.into())
}
