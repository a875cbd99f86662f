//! Portable SQL DDL compiler.
//!
//! Renders the schema definitions as `CREATE TABLE` statements with primary
//! keys, foreign keys, `CHECK` constraints and defaults, followed by the four
//! reporting views. The output is meant to be saved as a migration file for a
//! SQL engine; this crate itself never executes it.

use crate::db::schema::definition::{DefaultValue, SchemaField, SchemaRelation};

/// Compiler for generating SQL DDL from schema definitions.
pub struct SqlCompiler;

/// `CREATE VIEW` statements for the reporting views.
///
/// Optional references (gender, department) use `LEFT JOIN` so every base row
/// appears exactly once.
pub const VIEW_DEFINITIONS: &[(&str, &str)] = &[
    (
        "patient_details",
        "CREATE VIEW patient_details AS
SELECT
    p.patient_id,
    p.first_name || ' ' || p.last_name AS patient_name,
    g.name AS gender,
    p.date_of_birth,
    p.contact_number,
    p.email,
    p.address,
    p.created_date
FROM patient p
LEFT JOIN gender g ON p.gender_id = g.gender_id;",
    ),
    (
        "doctor_details",
        "CREATE VIEW doctor_details AS
SELECT
    d.doctor_id,
    d.first_name || ' ' || d.last_name AS doctor_name,
    g.name AS gender,
    dep.name AS department,
    d.specialization,
    d.contact_number,
    d.email,
    d.created_date
FROM doctor d
LEFT JOIN gender g ON d.gender_id = g.gender_id
LEFT JOIN department dep ON d.department_id = dep.department_id;",
    ),
    (
        "appointment_details",
        "CREATE VIEW appointment_details AS
SELECT
    a.appointment_id,
    a.patient_id,
    p.first_name || ' ' || p.last_name AS patient_name,
    a.doctor_id,
    d.first_name || ' ' || d.last_name AS doctor_name,
    dep.name AS department,
    a.appointment_date,
    a.status
FROM appointment a
JOIN patient p ON a.patient_id = p.patient_id
JOIN doctor d ON a.doctor_id = d.doctor_id
LEFT JOIN department dep ON d.department_id = dep.department_id;",
    ),
    (
        "admission_details",
        "CREATE VIEW admission_details AS
SELECT
    ad.admission_id,
    ad.patient_id,
    p.first_name || ' ' || p.last_name AS patient_name,
    ad.doctor_id,
    d.first_name || ' ' || d.last_name AS doctor_name,
    ad.room_id,
    r.room_number,
    r.room_type,
    ad.admission_date,
    ad.discharge_date,
    ad.status
FROM admission ad
JOIN patient p ON ad.patient_id = p.patient_id
JOIN doctor d ON ad.doctor_id = d.doctor_id
JOIN room r ON ad.room_id = r.room_id;",
    ),
];

impl SqlCompiler {
    /// Generate a `CREATE TABLE` statement for one relation.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let mut lines: Vec<String> = Vec::new();

        for field in relation.key_fields {
            lines.push(format!(
                "    {} {} PRIMARY KEY",
                field.name,
                field.data_type.sql_type()
            ));
        }
        for field in relation.value_fields {
            lines.push(format!("    {}", Self::column_decl(field)));
        }
        for fk in relation.foreign_keys {
            lines.push(format!(
                "    FOREIGN KEY ({}) REFERENCES {}({})",
                fk.field, fk.target, fk.target_field
            ));
        }

        format!("CREATE TABLE {} (\n{}\n);", relation.name, lines.join(",\n"))
    }

    fn column_decl(field: &SchemaField) -> String {
        let mut decl = format!("{} {}", field.name, field.data_type.sql_type());
        if !field.nullable {
            decl.push_str(" NOT NULL");
        }
        match field.default {
            Some(DefaultValue::Text(text)) => decl.push_str(&format!(" DEFAULT '{}'", text)),
            Some(DefaultValue::Int(value)) => decl.push_str(&format!(" DEFAULT {}", value)),
            Some(DefaultValue::CurrentTimestamp) => decl.push_str(" DEFAULT CURRENT_TIMESTAMP"),
            None => {}
        }
        if !field.allowed.is_empty() {
            let values = field
                .allowed
                .iter()
                .map(|v| format!("'{}'", v))
                .collect::<Vec<_>>()
                .join(", ");
            decl.push_str(&format!(" CHECK ({} IN ({}))", field.name, values));
        }
        decl
    }

    /// Tables for all relations followed by the reporting views.
    pub fn compile_all(relations: &[&SchemaRelation]) -> Vec<String> {
        relations
            .iter()
            .map(|rel| Self::compile_relation(rel))
            .chain(VIEW_DEFINITIONS.iter().map(|(_, sql)| sql.to_string()))
            .collect()
    }
}
