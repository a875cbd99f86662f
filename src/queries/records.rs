//! Generic record access over the schema relations.
//!
//! Every write goes through `integrity::check_row` (inserts and updates) or
//! `integrity::check_delete` (deletes) before it reaches the engine.

use std::error::Error;

use cozo::DataValue;
use tracing::debug;

use crate::db::schema::{CozoCompiler, DefaultValue, SchemaRelation};
use crate::db::{extract_i64, int_value, str_value, DatabaseBackend, Params, RowMap};
use crate::queries::integrity::{check_delete, check_row, ConstraintViolation};
use crate::types::{Entity, NewRecord};
use crate::utils::now_timestamp;

/// Next free identifier: `max(id) + 1`, or 1 for an empty relation.
pub fn next_id(db: &dyn DatabaseBackend, relation: &SchemaRelation) -> Result<i64, Box<dyn Error>> {
    let result = db.execute_query_no_params(&CozoCompiler::compile_max_id(relation))?;
    let max = result
        .rows
        .first()
        .and_then(|row| row.first())
        .map(|v| extract_i64(v, 0))
        .unwrap_or(0);
    Ok(max + 1)
}

fn apply_defaults(relation: &SchemaRelation, values: &mut RowMap) {
    for field in relation.value_fields {
        let absent = values.get(field.name).is_none_or(|v| *v == DataValue::Null);
        if !absent {
            continue;
        }
        let value = match field.default {
            Some(DefaultValue::Text(text)) => str_value(text),
            Some(DefaultValue::Int(n)) => int_value(n),
            Some(DefaultValue::CurrentTimestamp) => str_value(&now_timestamp()),
            None => DataValue::Null,
        };
        values.insert(field.name.to_string(), value);
    }
}

/// A checked row waiting to be written.
#[derive(Debug, Clone)]
pub struct PendingWrite {
    pub relation: &'static SchemaRelation,
    pub id: i64,
    pub values: RowMap,
}

impl PendingWrite {
    fn params(&self, prefix: &str) -> Params {
        let mut params: Params = self
            .values
            .iter()
            .map(|(k, v)| (format!("{}{}", prefix, k), v.clone()))
            .collect();
        params.insert(
            format!("{}{}", prefix, self.relation.id_field()),
            int_value(self.id),
        );
        params
    }
}

/// Apply defaults, run the integrity checks and assign an id, without writing.
pub fn prepare_insert(
    db: &dyn DatabaseBackend,
    relation: &'static SchemaRelation,
    values: RowMap,
) -> Result<PendingWrite, Box<dyn Error>> {
    let mut values = values;
    values.remove(relation.id_field());
    apply_defaults(relation, &mut values);
    check_row(db, relation, &values)?;

    let id = next_id(db, relation)?;
    Ok(PendingWrite { relation, id, values })
}

/// Merge `changes` over the stored row and re-run the checks, without writing.
///
/// The key column cannot be changed. Status columns are only checked against
/// their allowed values here; transition rules live in the workflow service.
pub fn prepare_update(
    db: &dyn DatabaseBackend,
    relation: &'static SchemaRelation,
    id: i64,
    changes: RowMap,
) -> Result<PendingWrite, Box<dyn Error>> {
    let mut values = get_row(db, relation, id)?.ok_or_else(|| ConstraintViolation::not_found(relation, id))?;

    if changes.contains_key(relation.id_field()) {
        return Err(ConstraintViolation::UnknownField {
            relation: relation.name.to_string(),
            field: relation.id_field().to_string(),
        }
        .into());
    }

    values.remove(relation.id_field());
    values.extend(changes);
    check_row(db, relation, &values)?;
    Ok(PendingWrite { relation, id, values })
}

/// Write prepared rows. Several rows are written in one transaction.
pub fn commit(db: &dyn DatabaseBackend, writes: &[PendingWrite]) -> Result<(), Box<dyn Error>> {
    match writes {
        [] => Ok(()),
        [single] => {
            db.execute_query(&CozoCompiler::compile_put(single.relation), &single.params(""))?;
            debug!(relation = single.relation.name, id = single.id, "wrote row");
            Ok(())
        }
        _ => {
            let mut scripts = Vec::with_capacity(writes.len());
            let mut params = Params::new();
            for (idx, write) in writes.iter().enumerate() {
                let prefix = format!("w{}_", idx);
                scripts.push(CozoCompiler::compile_put_as(write.relation, &prefix));
                params.extend(write.params(&prefix));
            }
            db.execute_query(&CozoCompiler::chain(&scripts), &params)?;
            for write in writes {
                debug!(relation = write.relation.name, id = write.id, "wrote row");
            }
            Ok(())
        }
    }
}

/// Insert a row after the integrity checks, returning its assigned id.
///
/// Any key column in `values` is ignored; the id is always assigned here.
pub fn insert(
    db: &dyn DatabaseBackend,
    relation: &'static SchemaRelation,
    values: RowMap,
) -> Result<i64, Box<dyn Error>> {
    let write = prepare_insert(db, relation, values)?;
    commit(db, std::slice::from_ref(&write))?;
    Ok(write.id)
}

/// Fetch one row by key.
pub fn get_row(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    id: i64,
) -> Result<Option<RowMap>, Box<dyn Error>> {
    let mut params = Params::new();
    params.insert("id".to_string(), int_value(id));
    let result = db.execute_query(&CozoCompiler::compile_select_by_id(relation), &params)?;
    Ok(result.row_maps().into_iter().next())
}

/// All rows ordered by key.
pub fn list_rows(db: &dyn DatabaseBackend, relation: &SchemaRelation) -> Result<Vec<RowMap>, Box<dyn Error>> {
    let result = db.execute_query_no_params(&CozoCompiler::compile_select_all(relation))?;
    Ok(result.row_maps())
}

/// Number of rows in a relation.
pub fn count(db: &dyn DatabaseBackend, relation: &SchemaRelation) -> Result<usize, Box<dyn Error>> {
    let script = format!(
        "?[count({id})] := *{name}{{{id}}}",
        id = relation.id_field(),
        name = relation.name
    );
    let result = db.execute_query_no_params(&script)?;
    Ok(result
        .rows
        .first()
        .and_then(|row| row.first())
        .map(|v| extract_i64(v, 0))
        .unwrap_or(0) as usize)
}

/// Merge `changes` over the stored row and write it back.
pub fn update(
    db: &dyn DatabaseBackend,
    relation: &'static SchemaRelation,
    id: i64,
    changes: RowMap,
) -> Result<(), Box<dyn Error>> {
    let write = prepare_update(db, relation, id, changes)?;
    commit(db, std::slice::from_ref(&write))
}

/// Delete a row under the restrict policy.
pub fn delete(db: &dyn DatabaseBackend, relation: &SchemaRelation, id: i64) -> Result<(), Box<dyn Error>> {
    check_delete(db, relation, id)?;

    let mut params = Params::new();
    params.insert("id".to_string(), int_value(id));
    db.execute_query(&CozoCompiler::compile_delete(relation), &params)?;
    debug!(relation = relation.name, id, "deleted row");
    Ok(())
}

/// Typed fetch by key.
pub fn get<T: Entity>(db: &dyn DatabaseBackend, id: i64) -> Result<Option<T>, Box<dyn Error>> {
    match get_row(db, T::RELATION, id)? {
        Some(row) => Ok(Some(T::from_row(&row)?)),
        None => Ok(None),
    }
}

/// Typed fetch by key, failing with `NotFound` when absent.
pub fn fetch<T: Entity>(db: &dyn DatabaseBackend, id: i64) -> Result<T, Box<dyn Error>> {
    get(db, id)?.ok_or_else(|| ConstraintViolation::not_found(T::RELATION, id).into())
}

/// Typed listing ordered by key.
pub fn list<T: Entity>(db: &dyn DatabaseBackend) -> Result<Vec<T>, Box<dyn Error>> {
    list_rows(db, T::RELATION)?
        .iter()
        .map(|row| T::from_row(row).map_err(Box::<dyn Error>::from))
        .collect()
}

/// Insert a typed payload and return the stored entity.
pub fn create<N: NewRecord + ?Sized>(db: &dyn DatabaseBackend, record: &N) -> Result<N::Entity, Box<dyn Error>> {
    let relation = <N::Entity as Entity>::RELATION;
    let id = insert(db, relation, record.values())?;
    fetch(db, id)
}

/// Overwrite the row `id` with a typed payload and return the stored entity.
///
/// Columns outside the payload, such as `created_date`, keep their stored value.
pub fn save<N: NewRecord + ?Sized>(
    db: &dyn DatabaseBackend,
    id: i64,
    record: &N,
) -> Result<N::Entity, Box<dyn Error>> {
    let relation = <N::Entity as Entity>::RELATION;
    update(db, relation, id, record.values())?;
    fetch(db, id)
}
