//! Demonstration sample data.
//!
//! Lookup rows (genders, departments, rooms) are written as one batch; people go
//! through the checked insert path; appointments and admissions go through the
//! workflow service so that occupied rooms are marked as such.

use std::error::Error;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::db::schema::{CozoCompiler, SchemaRelation, ALL_RELATIONS, DEPARTMENT, GENDER, ROOM};
use crate::db::DatabaseBackend;
use crate::queries::records;
use crate::types::{NewAdmission, NewAppointment, NewDoctor, NewPatient, NewRecord};
use crate::workflow;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database already contains data ({relation} has {count} rows); seed requires an empty database")]
    NotEmpty { relation: String, count: usize },
}

/// Rows written per relation.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SeedResult {
    pub genders: usize,
    pub departments: usize,
    pub rooms: usize,
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
    pub admissions: usize,
}

const GENDERS: &[&str] = &["Male", "Female"];

const DEPARTMENTS: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "General Medicine",
];

const ROOMS: &[(&str, &str)] = &[
    ("101", "General"),
    ("102", "General"),
    ("201", "ICU"),
    ("202", "Private"),
    ("301", "Emergency"),
];

fn seed_lookup(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    rows: Vec<String>,
) -> Result<usize, Box<dyn Error>> {
    let count = rows.len();
    db.execute_query_no_params(&CozoCompiler::compile_insert(relation, &rows))?;
    Ok(count)
}

fn patients(male: i64, female: i64) -> Vec<NewPatient> {
    vec![
        NewPatient {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            gender_id: Some(male),
            date_of_birth: Some("1985-06-15".to_string()),
            contact_number: Some("5551234567".to_string()),
            email: Some("john.doe@example.com".to_string()),
            address: Some("123 Main St, Springfield".to_string()),
        },
        NewPatient {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            gender_id: Some(female),
            date_of_birth: Some("1990-03-22".to_string()),
            contact_number: Some("5559876543".to_string()),
            email: Some("jane.smith@example.com".to_string()),
            address: Some("456 Oak Ave, Springfield".to_string()),
        },
        NewPatient {
            first_name: "Robert".to_string(),
            last_name: "Johnson".to_string(),
            gender_id: Some(male),
            date_of_birth: Some("1978-11-30".to_string()),
            contact_number: Some("5554567890".to_string()),
            email: Some("robert.johnson@example.com".to_string()),
            address: Some("789 Pine Rd, Shelbyville".to_string()),
        },
    ]
}

fn doctors(male: i64, female: i64) -> Vec<NewDoctor> {
    vec![
        NewDoctor {
            first_name: "Emily".to_string(),
            last_name: "Brown".to_string(),
            gender_id: Some(female),
            department_id: Some(1),
            specialization: Some("Cardiologist".to_string()),
            contact_number: Some("5551112222".to_string()),
            email: Some("emily.brown@hospital.example".to_string()),
        },
        NewDoctor {
            first_name: "Michael".to_string(),
            last_name: "Davis".to_string(),
            gender_id: Some(male),
            department_id: Some(2),
            specialization: Some("Neurologist".to_string()),
            contact_number: Some("5553334444".to_string()),
            email: Some("michael.davis@hospital.example".to_string()),
        },
        NewDoctor {
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            gender_id: Some(female),
            department_id: Some(4),
            specialization: Some("Pediatrician".to_string()),
            contact_number: Some("5555556666".to_string()),
            email: Some("sarah.wilson@hospital.example".to_string()),
        },
    ]
}

/// Populate an empty, migrated database with the sample data set.
pub fn seed(db: &dyn DatabaseBackend) -> Result<SeedResult, Box<dyn Error>> {
    for relation in ALL_RELATIONS {
        let count = records::count(db, relation)?;
        if count > 0 {
            return Err(SeedError::NotEmpty {
                relation: relation.name.to_string(),
                count,
            }
            .into());
        }
    }

    let mut result = SeedResult {
        genders: seed_lookup(
            db,
            &GENDER,
            GENDERS
                .iter()
                .enumerate()
                .map(|(i, name)| format!("[{}, \"{}\"]", i + 1, name))
                .collect(),
        )?,
        departments: seed_lookup(
            db,
            &DEPARTMENT,
            DEPARTMENTS
                .iter()
                .enumerate()
                .map(|(i, name)| format!("[{}, \"{}\"]", i + 1, name))
                .collect(),
        )?,
        rooms: seed_lookup(
            db,
            &ROOM,
            ROOMS
                .iter()
                .enumerate()
                .map(|(i, (number, kind))| format!("[{}, \"{}\", \"{}\", \"Available\"]", i + 1, number, kind))
                .collect(),
        )?,
        ..SeedResult::default()
    };

    let (male, female) = (1, 2);
    let patient_ids = patients(male, female)
        .iter()
        .map(|p| p.insert(db).map(|stored| stored.patient_id))
        .collect::<Result<Vec<_>, _>>()?;
    result.patients = patient_ids.len();

    let doctor_ids = doctors(male, female)
        .iter()
        .map(|d| d.insert(db).map(|stored| stored.doctor_id))
        .collect::<Result<Vec<_>, _>>()?;
    result.doctors = doctor_ids.len();

    let appointments = [
        (patient_ids[0], doctor_ids[0], "2024-03-01 09:00:00"),
        (patient_ids[1], doctor_ids[1], "2024-03-01 10:00:00"),
        (patient_ids[2], doctor_ids[2], "2024-03-02 14:00:00"),
    ];
    for (patient_id, doctor_id, date) in appointments {
        workflow::book_appointment(
            db,
            &NewAppointment {
                patient_id,
                doctor_id,
                appointment_date: date.to_string(),
            },
        )?;
        result.appointments += 1;
    }

    let admissions = [
        (patient_ids[0], doctor_ids[0], 1, "2024-02-28 08:00:00", "Chest pain, under observation"),
        (patient_ids[2], doctor_ids[1], 3, "2024-02-29 15:30:00", "Post-operative monitoring"),
    ];
    for (patient_id, doctor_id, room_id, date, notes) in admissions {
        workflow::admit_patient(
            db,
            &NewAdmission {
                patient_id,
                doctor_id,
                room_id,
                admission_date: date.to_string(),
                notes: Some(notes.to_string()),
            },
        )?;
        result.admissions += 1;
    }

    info!(?result, "seeded sample data");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::{ADMISSION, APPOINTMENT, DOCTOR, PATIENT};
    use crate::test_utils::setup_test_db;
    use crate::types::{Room, RoomStatus};

    #[test]
    fn test_seed_counts() {
        let db = setup_test_db();
        let result = seed(&*db).unwrap();

        assert_eq!(
            result,
            SeedResult {
                genders: 2,
                departments: 5,
                rooms: 5,
                patients: 3,
                doctors: 3,
                appointments: 3,
                admissions: 2,
            }
        );
        assert_eq!(records::count(&*db, &PATIENT).unwrap(), 3);
        assert_eq!(records::count(&*db, &DOCTOR).unwrap(), 3);
        assert_eq!(records::count(&*db, &ROOM).unwrap(), 5);
        assert_eq!(records::count(&*db, &APPOINTMENT).unwrap(), 3);
        assert_eq!(records::count(&*db, &ADMISSION).unwrap(), 2);
    }

    #[test]
    fn test_seed_marks_admitted_rooms_occupied() {
        let db = setup_test_db();
        seed(&*db).unwrap();

        let rooms: Vec<Room> = records::list(&*db).unwrap();
        let occupied: Vec<_> = rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Occupied)
            .map(|r| r.room_number.as_str())
            .collect();
        assert_eq!(occupied, vec!["101", "201"]);
    }

    #[test]
    fn test_seed_twice_fails() {
        let db = setup_test_db();
        seed(&*db).unwrap();

        let err = seed(&*db).unwrap_err();
        assert!(err.to_string().contains("seed requires an empty database"));
    }
}
