//! Cozo Datalog DDL and statement compiler.
//!
//! Generates Cozo Datalog DDL (`:create relation { ... }`) and the parameterised
//! read/write scripts used by the data-access layer. The output format is
//! deterministic; every script binds its values through `$name` parameters.

use crate::db::schema::definition::{DataType, DefaultValue, ForeignKey, SchemaField, SchemaRelation};

/// Compiler for generating CozoScript from schema definitions.
pub struct CozoCompiler;

impl CozoCompiler {
    /// Generate Cozo DDL for a single relation.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// :create relation_name {
    ///     key_field: Int
    ///     =>
    ///     value_field1: String,
    ///     value_field2: Int?,
    ///     status: String default "Scheduled"
    /// }
    /// ```
    ///
    /// `CurrentTimestamp` defaults have no Cozo rendering: the data-access layer
    /// stamps them before writing.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let key_fields = relation
            .key_fields
            .iter()
            .map(|f| format!("    {}", Self::column_decl(f)))
            .collect::<Vec<_>>()
            .join(",\n");

        let value_fields = relation
            .value_fields
            .iter()
            .map(|f| format!("    {}", Self::column_decl(f)))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            ":create {} {{\n{}\n    =>\n{}\n}}",
            relation.name, key_fields, value_fields
        )
    }

    fn column_decl(field: &SchemaField) -> String {
        let nullable = if field.nullable { "?" } else { "" };
        let decl = format!("{}: {}{}", field.name, field.data_type.cozo_type(), nullable);
        match field.default {
            Some(DefaultValue::Text(text)) => format!("{} default \"{}\"", decl, text),
            Some(DefaultValue::Int(value)) if field.data_type == DataType::Int => {
                format!("{} default {}", decl, value)
            }
            _ => decl,
        }
    }

    /// Generate DDL for all relations.
    pub fn compile_all(relations: &[&SchemaRelation]) -> Vec<String> {
        relations
            .iter()
            .map(|rel| Self::compile_relation(rel))
            .collect()
    }

    fn columns(fields: &[SchemaField]) -> String {
        fields.iter().map(|f| f.name).collect::<Vec<_>>().join(", ")
    }

    fn all_columns(relation: &SchemaRelation) -> String {
        relation.all_fields().map(|f| f.name).collect::<Vec<_>>().join(", ")
    }

    /// Generate a `:put` of one full row, every column bound to `$column`.
    ///
    /// ```cozo
    /// ?[room_id, room_number, room_type, status] :=
    ///     room_id = $room_id, room_number = $room_number, room_type = $room_type, status = $status
    /// :put room { room_id => room_number, room_type, status }
    /// ```
    pub fn compile_put(relation: &SchemaRelation) -> String {
        Self::compile_put_as(relation, "")
    }

    /// Like `compile_put`, with every parameter named `$<prefix><column>`.
    ///
    /// Used when several puts share one parameter map in a chained script.
    pub fn compile_put_as(relation: &SchemaRelation, param_prefix: &str) -> String {
        let bindings = relation
            .all_fields()
            .map(|f| format!("{} = ${}{}", f.name, param_prefix, f.name))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "?[{}] := {}\n:put {} {{ {} => {} }}",
            Self::all_columns(relation),
            bindings,
            relation.name,
            Self::columns(relation.key_fields),
            Self::columns(relation.value_fields),
        )
    }

    /// Generate a batch `:put` from pre-formatted row literals.
    ///
    /// ```cozo
    /// ?[gender_id, name] <- [[1, "Male"], [2, "Female"]]
    /// :put gender { gender_id => name }
    /// ```
    pub fn compile_insert(relation: &SchemaRelation, row_literals: &[String]) -> String {
        format!(
            "?[{}] <- [{}]\n:put {} {{ {} => {} }}",
            Self::all_columns(relation),
            row_literals.join(", "),
            relation.name,
            Self::columns(relation.key_fields),
            Self::columns(relation.value_fields),
        )
    }

    /// Select one row by its key, bound to `$id`.
    pub fn compile_select_by_id(relation: &SchemaRelation) -> String {
        let columns = Self::all_columns(relation);
        format!(
            "?[{}] := *{}{{{}}}, {} == $id",
            columns,
            relation.name,
            columns,
            relation.id_field()
        )
    }

    /// Select every row ordered by key.
    pub fn compile_select_all(relation: &SchemaRelation) -> String {
        let columns = Self::all_columns(relation);
        format!(
            "?[{}] := *{}{{{}}}\n:order {}",
            columns,
            relation.name,
            columns,
            relation.id_field()
        )
    }

    /// Largest assigned id. Empty relations yield no value.
    pub fn compile_max_id(relation: &SchemaRelation) -> String {
        let id = relation.id_field();
        format!("?[max({})] := *{}{{{}}}", id, relation.name, id)
    }

    /// Ids of the rows in `relation` whose `fk.field` equals `$id`.
    pub fn compile_referencing(relation: &SchemaRelation, fk: &ForeignKey) -> String {
        let id = relation.id_field();
        format!(
            "?[{}] := *{}{{{}, {}}}, {} == $id",
            id, relation.name, id, fk.field, fk.field
        )
    }

    /// Remove one row by key, bound to `$id`.
    ///
    /// ```cozo
    /// ?[room_id] := room_id = $id
    /// :rm room {room_id}
    /// ```
    pub fn compile_delete(relation: &SchemaRelation) -> String {
        let id = relation.id_field();
        format!("?[{}] := {} = $id\n:rm {} {{{}}}", id, id, relation.name, id)
    }

    /// Chain several scripts into one transaction.
    pub fn chain(scripts: &[String]) -> String {
        scripts
            .iter()
            .map(|s| format!("{{\n{}\n}}", s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
