//! All database relation definitions.
//!
//! This module defines the seven base relations of the hospital schema plus the
//! `schema_migrations` bookkeeping relation.

use super::definition::{DataType, DefaultValue, ForeignKey, SchemaField, SchemaRelation};

/// Accepted values of `appointment.status`.
pub const APPOINTMENT_STATUSES: &[&str] = &["Scheduled", "Completed", "Cancelled"];

/// Accepted values of `room.status`.
pub const ROOM_STATUSES: &[&str] = &["Available", "Occupied"];

/// Accepted values of `admission.status`.
pub const ADMISSION_STATUSES: &[&str] = &["Admitted", "Discharged"];

const CREATED_DATE: SchemaField =
    SchemaField::new("created_date", DataType::String).with_default(DefaultValue::CurrentTimestamp);

/// Gender lookup relation.
///
/// Key fields: gender_id
/// Value fields: name
pub const GENDER: SchemaRelation = SchemaRelation {
    name: "gender",
    key_fields: &[SchemaField::new("gender_id", DataType::Int)],
    value_fields: &[SchemaField::new("name", DataType::String)],
    foreign_keys: &[],
};

/// Department lookup relation.
///
/// Key fields: department_id
/// Value fields: name
pub const DEPARTMENT: SchemaRelation = SchemaRelation {
    name: "department",
    key_fields: &[SchemaField::new("department_id", DataType::Int)],
    value_fields: &[SchemaField::new("name", DataType::String)],
    foreign_keys: &[],
};

/// Patient relation.
///
/// Key fields: patient_id
/// Value fields: first_name, last_name, gender_id?, date_of_birth?, contact_number?,
/// email?, address?, created_date
pub const PATIENT: SchemaRelation = SchemaRelation {
    name: "patient",
    key_fields: &[SchemaField::new("patient_id", DataType::Int)],
    value_fields: &[
        SchemaField::new("first_name", DataType::String),
        SchemaField::new("last_name", DataType::String),
        SchemaField::new("gender_id", DataType::Int).optional(),
        SchemaField::new("date_of_birth", DataType::String).optional(),
        SchemaField::new("contact_number", DataType::String).optional(),
        SchemaField::new("email", DataType::String).optional(),
        SchemaField::new("address", DataType::String).optional(),
        CREATED_DATE,
    ],
    foreign_keys: &[ForeignKey {
        field: "gender_id",
        target: "gender",
        target_field: "gender_id",
    }],
};

/// Doctor relation.
///
/// Key fields: doctor_id
/// Value fields: first_name, last_name, gender_id?, department_id?, specialization?,
/// contact_number?, email?, created_date
pub const DOCTOR: SchemaRelation = SchemaRelation {
    name: "doctor",
    key_fields: &[SchemaField::new("doctor_id", DataType::Int)],
    value_fields: &[
        SchemaField::new("first_name", DataType::String),
        SchemaField::new("last_name", DataType::String),
        SchemaField::new("gender_id", DataType::Int).optional(),
        SchemaField::new("department_id", DataType::Int).optional(),
        SchemaField::new("specialization", DataType::String).optional(),
        SchemaField::new("contact_number", DataType::String).optional(),
        SchemaField::new("email", DataType::String).optional(),
        CREATED_DATE,
    ],
    foreign_keys: &[
        ForeignKey {
            field: "gender_id",
            target: "gender",
            target_field: "gender_id",
        },
        ForeignKey {
            field: "department_id",
            target: "department",
            target_field: "department_id",
        },
    ],
};

/// Appointment relation.
///
/// Key fields: appointment_id
/// Value fields: patient_id, doctor_id, appointment_date, status, created_date
pub const APPOINTMENT: SchemaRelation = SchemaRelation {
    name: "appointment",
    key_fields: &[SchemaField::new("appointment_id", DataType::Int)],
    value_fields: &[
        SchemaField::new("patient_id", DataType::Int),
        SchemaField::new("doctor_id", DataType::Int),
        SchemaField::new("appointment_date", DataType::String),
        SchemaField::new("status", DataType::String)
            .with_default(DefaultValue::Text("Scheduled"))
            .one_of(APPOINTMENT_STATUSES),
        CREATED_DATE,
    ],
    foreign_keys: &[
        ForeignKey {
            field: "patient_id",
            target: "patient",
            target_field: "patient_id",
        },
        ForeignKey {
            field: "doctor_id",
            target: "doctor",
            target_field: "doctor_id",
        },
    ],
};

/// Room relation.
///
/// Key fields: room_id
/// Value fields: room_number, room_type, status
pub const ROOM: SchemaRelation = SchemaRelation {
    name: "room",
    key_fields: &[SchemaField::new("room_id", DataType::Int)],
    value_fields: &[
        SchemaField::new("room_number", DataType::String),
        SchemaField::new("room_type", DataType::String),
        SchemaField::new("status", DataType::String)
            .with_default(DefaultValue::Text("Available"))
            .one_of(ROOM_STATUSES),
    ],
    foreign_keys: &[],
};

/// Admission relation.
///
/// Key fields: admission_id
/// Value fields: patient_id, doctor_id, room_id, admission_date, discharge_date?,
/// status, notes?, created_date
pub const ADMISSION: SchemaRelation = SchemaRelation {
    name: "admission",
    key_fields: &[SchemaField::new("admission_id", DataType::Int)],
    value_fields: &[
        SchemaField::new("patient_id", DataType::Int),
        SchemaField::new("doctor_id", DataType::Int),
        SchemaField::new("room_id", DataType::Int),
        SchemaField::new("admission_date", DataType::String),
        SchemaField::new("discharge_date", DataType::String).optional(),
        SchemaField::new("status", DataType::String)
            .with_default(DefaultValue::Text("Admitted"))
            .one_of(ADMISSION_STATUSES),
        SchemaField::new("notes", DataType::String).optional(),
        CREATED_DATE,
    ],
    foreign_keys: &[
        ForeignKey {
            field: "patient_id",
            target: "patient",
            target_field: "patient_id",
        },
        ForeignKey {
            field: "doctor_id",
            target: "doctor",
            target_field: "doctor_id",
        },
        ForeignKey {
            field: "room_id",
            target: "room",
            target_field: "room_id",
        },
    ],
};

/// Applied schema versions.
///
/// Key fields: version
/// Value fields: description, applied_at
pub const SCHEMA_MIGRATIONS: SchemaRelation = SchemaRelation {
    name: "schema_migrations",
    key_fields: &[SchemaField::new("version", DataType::Int)],
    value_fields: &[
        SchemaField::new("description", DataType::String),
        SchemaField::new("applied_at", DataType::String),
    ],
    foreign_keys: &[],
};

/// The seven base relations, referenced relations first.
pub const ALL_RELATIONS: &[&SchemaRelation] = &[
    &GENDER,
    &DEPARTMENT,
    &PATIENT,
    &DOCTOR,
    &APPOINTMENT,
    &ROOM,
    &ADMISSION,
];

/// Find a base relation by name.
pub fn find_relation(name: &str) -> Option<&'static SchemaRelation> {
    ALL_RELATIONS.iter().copied().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_relations_count() {
        assert_eq!(ALL_RELATIONS.len(), 7);
    }

    #[test]
    fn test_relations_listed_after_their_targets() {
        for (idx, relation) in ALL_RELATIONS.iter().enumerate() {
            for fk in relation.foreign_keys {
                let target_idx = ALL_RELATIONS
                    .iter()
                    .position(|r| r.name == fk.target)
                    .unwrap();
                assert!(
                    target_idx < idx,
                    "{} references {} which is listed later",
                    relation.name,
                    fk.target
                );
            }
        }
    }

    #[test]
    fn test_foreign_keys_point_at_target_keys() {
        for relation in ALL_RELATIONS {
            for fk in relation.foreign_keys {
                let target = find_relation(fk.target).unwrap();
                assert_eq!(target.id_field(), fk.target_field);
                assert!(relation.field(fk.field).is_some());
            }
        }
    }

    #[test]
    fn test_key_field_named_after_relation() {
        for relation in ALL_RELATIONS {
            assert_eq!(relation.id_field(), format!("{}_id", relation.name));
        }
    }

    #[test]
    fn test_patient_optional_columns() {
        let nullable: Vec<_> = PATIENT
            .value_fields
            .iter()
            .filter(|f| f.nullable)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            nullable,
            vec!["gender_id", "date_of_birth", "contact_number", "email", "address"]
        );
    }

    #[test]
    fn test_status_defaults() {
        let appointment = APPOINTMENT.field("status").unwrap();
        assert_eq!(appointment.default, Some(DefaultValue::Text("Scheduled")));
        assert_eq!(appointment.allowed, APPOINTMENT_STATUSES);

        let room = ROOM.field("status").unwrap();
        assert_eq!(room.default, Some(DefaultValue::Text("Available")));

        let admission = ADMISSION.field("status").unwrap();
        assert_eq!(admission.default, Some(DefaultValue::Text("Admitted")));
    }

    #[test]
    fn test_find_relation() {
        assert_eq!(find_relation("room").map(|r| r.name), Some("room"));
        assert!(find_relation("schema_migrations").is_none());
        assert!(find_relation("ward").is_none());
    }
}
