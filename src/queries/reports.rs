//! Operational reports: doctor workload, department analytics, patient
//! demographics, room availability and the dashboard.
//!
//! Counts are aggregated by Cozo per key; doctors or rooms with nothing to
//! count get zero on the Rust side.

use std::collections::HashMap;
use std::error::Error;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::db::schema::{PATIENT, ROOM};
use crate::db::{extract_i64, extract_string, int_value, str_value, DatabaseBackend, Params};
use crate::queries::integrity::ConstraintViolation;
use crate::queries::records;
use crate::queries::views::{doctor_details, ViewFilter};
use crate::types::{AdmissionStatus, AppointmentStatus, Department, Gender, Patient, Room, RoomStatus};
use crate::utils::{parse_date, OptionalConditionBuilder};

/// Appointment and admission totals for one doctor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorWorkload {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub department: Option<String>,
    pub total_appointments: i64,
    pub completed_appointments: i64,
    pub unique_patients: i64,
    /// Percentage of appointments completed, one decimal. Zero without appointments.
    pub completion_rate: f64,
    pub current_admissions: i64,
}

/// Staffing and activity of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStats {
    pub department_id: i64,
    pub department: String,
    pub doctor_count: i64,
    /// Distinct patients admitted under the department's doctors.
    pub patient_count: i64,
    pub appointment_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderDemographics {
    pub gender_id: i64,
    pub gender: String,
    pub patient_count: i64,
    /// Mean age in whole years, one decimal. `None` when no birth date is on file.
    pub average_age: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomAvailability {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub status: RoomStatus,
    /// Name of the admitted patient, for occupied rooms.
    pub occupant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub date: String,
    pub total_patients: i64,
    pub appointments_on_date: i64,
    pub current_admissions: i64,
    pub available_rooms: i64,
}

/// Run a `?[key, aggregate]` script and collect it by key.
fn counts_by_key(
    db: &dyn DatabaseBackend,
    script: &str,
    params: &Params,
) -> Result<HashMap<i64, i64>, Box<dyn Error>> {
    let rows = db.execute_query(script, params)?;

    let mut counts = HashMap::new();
    for row in rows.rows {
        if row.len() >= 2 {
            counts.insert(extract_i64(&row[0], 0), extract_i64(&row[1], 0));
        }
    }
    Ok(counts)
}

/// Run a `?[aggregate]` script. No rows means zero.
fn single_count(db: &dyn DatabaseBackend, script: &str, params: &Params) -> Result<i64, Box<dyn Error>> {
    let rows = db.execute_query(script, params)?;
    Ok(rows
        .rows
        .first()
        .and_then(|row| row.first())
        .map(|v| extract_i64(v, 0))
        .unwrap_or(0))
}

fn completion_rate(completed: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (completed as f64 * 1000.0 / total as f64).round() / 10.0
}

/// Workload of every doctor, or of one doctor when `doctor_id` is given.
pub fn doctor_workload(
    db: &dyn DatabaseBackend,
    doctor_id: Option<i64>,
) -> Result<Vec<DoctorWorkload>, Box<dyn Error>> {
    let doctors = doctor_details(
        db,
        &ViewFilter {
            doctor_id,
            ..ViewFilter::default()
        },
    )?;
    if let (Some(id), true) = (doctor_id, doctors.is_empty()) {
        return Err(ConstraintViolation::NotFound {
            relation: "doctor".to_string(),
            id,
        }
        .into());
    }

    let doctor_cond = OptionalConditionBuilder::new("doctor_id", "doctor_id")
        .with_leading_comma()
        .build(doctor_id.is_some());

    let mut params = Params::new();
    if let Some(id) = doctor_id {
        params.insert("doctor_id".to_string(), int_value(id));
    }
    params.insert("completed".to_string(), str_value(AppointmentStatus::Completed.as_str()));
    params.insert("admitted".to_string(), str_value(AdmissionStatus::Admitted.as_str()));

    let totals = counts_by_key(
        db,
        &format!(
            "?[doctor_id, count(appointment_id)] := *appointment{{appointment_id, doctor_id}}{doctor_cond}"
        ),
        &params,
    )?;
    let completed = counts_by_key(
        db,
        &format!(
            "?[doctor_id, count(appointment_id)] := *appointment{{appointment_id, doctor_id, status}}, status == $completed{doctor_cond}"
        ),
        &params,
    )?;
    let patients = counts_by_key(
        db,
        &format!(
            "?[doctor_id, count_unique(patient_id)] := *appointment{{doctor_id, patient_id}}{doctor_cond}"
        ),
        &params,
    )?;
    let admitted = counts_by_key(
        db,
        &format!(
            "?[doctor_id, count(admission_id)] := *admission{{admission_id, doctor_id, status}}, status == $admitted{doctor_cond}"
        ),
        &params,
    )?;

    Ok(doctors
        .into_iter()
        .map(|doctor| {
            let id = doctor.doctor_id;
            let total = totals.get(&id).copied().unwrap_or(0);
            let done = completed.get(&id).copied().unwrap_or(0);
            DoctorWorkload {
                doctor_id: id,
                doctor_name: doctor.doctor_name,
                department: doctor.department,
                total_appointments: total,
                completed_appointments: done,
                unique_patients: patients.get(&id).copied().unwrap_or(0),
                completion_rate: completion_rate(done, total),
                current_admissions: admitted.get(&id).copied().unwrap_or(0),
            }
        })
        .collect())
}

/// Doctor, admitted patient and appointment counts for every department.
///
/// Doctors without a department are not counted anywhere.
pub fn department_stats(db: &dyn DatabaseBackend) -> Result<Vec<DepartmentStats>, Box<dyn Error>> {
    let params = Params::new();

    let doctors = counts_by_key(
        db,
        "?[department_id, count(doctor_id)] := *doctor{doctor_id, department_id}, !is_null(department_id)",
        &params,
    )?;
    let patients = counts_by_key(
        db,
        r#"
            ?[department_id, count_unique(patient_id)] :=
                *admission{patient_id, doctor_id},
                *doctor{doctor_id, department_id},
                !is_null(department_id)
        "#,
        &params,
    )?;
    let appointments = counts_by_key(
        db,
        r#"
            ?[department_id, count(appointment_id)] :=
                *appointment{appointment_id, doctor_id},
                *doctor{doctor_id, department_id},
                !is_null(department_id)
        "#,
        &params,
    )?;

    Ok(records::list::<Department>(db)?
        .into_iter()
        .map(|department| {
            let id = department.department_id;
            DepartmentStats {
                department_id: id,
                department: department.name,
                doctor_count: doctors.get(&id).copied().unwrap_or(0),
                patient_count: patients.get(&id).copied().unwrap_or(0),
                appointment_count: appointments.get(&id).copied().unwrap_or(0),
            }
        })
        .collect())
}

/// Whole years between `born` and `on`.
fn age_on(born: NaiveDate, on: NaiveDate) -> i32 {
    let before_birthday = (on.month(), on.day()) < (born.month(), born.day());
    on.year() - born.year() - i32::from(before_birthday)
}

fn average(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    Some((sum as f64 * 10.0 / values.len() as f64).round() / 10.0)
}

/// Patient count and average age per gender, as of `today`.
///
/// Patients without a gender are left out. Unparseable birth dates count
/// towards the patient total but not the average.
pub fn gender_demographics(
    db: &dyn DatabaseBackend,
    today: NaiveDate,
) -> Result<Vec<GenderDemographics>, Box<dyn Error>> {
    let mut ages: HashMap<i64, Vec<i32>> = HashMap::new();
    let mut counts: HashMap<i64, i64> = HashMap::new();

    for patient in records::list::<Patient>(db)? {
        let Some(gender_id) = patient.gender_id else { continue };
        *counts.entry(gender_id).or_default() += 1;
        if let Some(born) = patient.date_of_birth.as_deref().and_then(parse_date) {
            ages.entry(gender_id).or_default().push(age_on(born, today));
        }
    }

    Ok(records::list::<Gender>(db)?
        .into_iter()
        .map(|gender| {
            let id = gender.gender_id;
            GenderDemographics {
                gender_id: id,
                gender: gender.name,
                patient_count: counts.get(&id).copied().unwrap_or(0),
                average_age: ages.get(&id).and_then(|a| average(a)),
            }
        })
        .collect())
}

/// Admitted patient per room.
fn occupants(db: &dyn DatabaseBackend) -> Result<HashMap<i64, String>, Box<dyn Error>> {
    let script = r#"
        ?[room_id, patient_name] :=
            *admission{room_id, patient_id, status},
            status == $admitted,
            *patient{patient_id, first_name, last_name},
            patient_name = concat(first_name, ' ', last_name)
    "#;

    let mut params = Params::new();
    params.insert("admitted".to_string(), str_value(AdmissionStatus::Admitted.as_str()));

    let rows = db.execute_query(script, &params)?;
    let mut result = HashMap::new();
    for row in rows.rows {
        if row.len() >= 2 {
            let Some(name) = extract_string(&row[1]) else { continue };
            result.insert(extract_i64(&row[0], 0), name);
        }
    }
    Ok(result)
}

/// Rooms ordered by type then number, with the current occupant.
///
/// `room_type` matches exactly, ignoring case.
pub fn room_availability(
    db: &dyn DatabaseBackend,
    room_type: Option<&str>,
    only_available: bool,
) -> Result<Vec<RoomAvailability>, Box<dyn Error>> {
    let mut occupants = occupants(db)?;

    let mut rooms: Vec<Room> = records::list(db)?;
    rooms.retain(|room| {
        room_type.is_none_or(|t| room.room_type.eq_ignore_ascii_case(t))
            && (!only_available || room.status == RoomStatus::Available)
    });
    rooms.sort_by(|a, b| {
        (a.room_type.as_str(), a.room_number.as_str()).cmp(&(b.room_type.as_str(), b.room_number.as_str()))
    });

    Ok(rooms
        .into_iter()
        .map(|room| RoomAvailability {
            occupant: occupants.remove(&room.room_id),
            room_id: room.room_id,
            room_number: room.room_number,
            room_type: room.room_type,
            status: room.status,
        })
        .collect())
}

/// Headline counts for `date` (`YYYY-MM-DD`).
pub fn dashboard(db: &dyn DatabaseBackend, date: &str) -> Result<Dashboard, Box<dyn Error>> {
    let mut params = Params::new();
    params.insert("date".to_string(), str_value(date));
    params.insert("admitted".to_string(), str_value(AdmissionStatus::Admitted.as_str()));
    params.insert("available".to_string(), str_value(RoomStatus::Available.as_str()));

    Ok(Dashboard {
        date: date.to_string(),
        total_patients: records::count(db, &PATIENT)? as i64,
        appointments_on_date: single_count(
            db,
            "?[count(appointment_id)] := *appointment{appointment_id, appointment_date}, starts_with(appointment_date, $date)",
            &params,
        )?,
        current_admissions: single_count(
            db,
            "?[count(admission_id)] := *admission{admission_id, status}, status == $admitted",
            &params,
        )?,
        available_rooms: single_count(
            db,
            &format!(
                "?[count(room_id)] := *{}{{room_id, status}}, status == $available",
                ROOM.name
            ),
            &params,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seeded_db, setup_test_db};
    use crate::types::{NewDoctor, NewPatient, NewRecord};
    use crate::workflow;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(1, 3, 33.3)]
    #[case(2, 3, 66.7)]
    #[case(4, 4, 100.0)]
    fn test_completion_rate(#[case] completed: i64, #[case] total: i64, #[case] expected: f64) {
        assert_eq!(completion_rate(completed, total), expected);
    }

    #[test]
    fn test_seeded_workload() {
        let db = seeded_db();
        let workload = doctor_workload(&*db, None).unwrap();

        assert_eq!(workload.len(), 3);
        let emily = &workload[0];
        assert_eq!(emily.doctor_name, "Emily Brown");
        assert_eq!(emily.department.as_deref(), Some("Cardiology"));
        assert_eq!(emily.total_appointments, 1);
        assert_eq!(emily.completed_appointments, 0);
        assert_eq!(emily.unique_patients, 1);
        assert_eq!(emily.current_admissions, 1);

        // Michael admitted Robert and has Jane's appointment.
        assert_eq!(workload[1].current_admissions, 1);
        assert_eq!(workload[2].current_admissions, 0);
    }

    #[test]
    fn test_workload_tracks_completion() {
        let db = seeded_db();
        workflow::set_appointment_status(&*db, 1, AppointmentStatus::Completed).unwrap();

        let workload = doctor_workload(&*db, Some(1)).unwrap();
        assert_eq!(workload.len(), 1);
        assert_eq!(workload[0].completed_appointments, 1);
        assert_eq!(workload[0].completion_rate, 100.0);
    }

    #[test]
    fn test_workload_doctor_without_appointments() {
        let db = setup_test_db();
        NewDoctor::new("Gregory", "House").insert(&*db).unwrap();

        let workload = doctor_workload(&*db, None).unwrap();
        assert_eq!(workload[0].total_appointments, 0);
        assert_eq!(workload[0].completion_rate, 0.0);
        assert_eq!(workload[0].department, None);
    }

    #[test]
    fn test_workload_unknown_doctor() {
        let db = seeded_db();
        let err = doctor_workload(&*db, Some(99)).unwrap_err();
        assert_eq!(err.to_string(), "doctor 99 not found");
    }

    #[test]
    fn test_seeded_department_stats() {
        let db = seeded_db();
        let stats = department_stats(&*db).unwrap();

        let summary: Vec<_> = stats
            .iter()
            .map(|d| (d.department.as_str(), d.doctor_count, d.patient_count, d.appointment_count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Cardiology", 1, 1, 1),
                ("Neurology", 1, 1, 1),
                ("Orthopedics", 0, 0, 0),
                ("Pediatrics", 1, 0, 1),
                ("General Medicine", 0, 0, 0),
            ]
        );
    }

    #[test]
    fn test_department_stats_skip_unassigned_doctors() {
        let db = seeded_db();
        NewDoctor::new("Gregory", "House").insert(&*db).unwrap();

        let stats = department_stats(&*db).unwrap();
        let doctors: i64 = stats.iter().map(|d| d.doctor_count).sum();
        assert_eq!(doctors, 3);
    }

    #[test]
    fn test_department_stats_empty_database() {
        let db = setup_test_db();
        assert!(department_stats(&*db).unwrap().is_empty());
    }

    #[rstest]
    #[case("1985-06-15", 38)]
    #[case("1990-03-22", 33)]
    #[case("1990-03-01", 34)]
    #[case("2000-02-29", 24)]
    fn test_age_on(#[case] born: &str, #[case] expected: i32) {
        let on = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(age_on(parse_date(born).unwrap(), on), expected);
    }

    #[test]
    fn test_seeded_gender_demographics() {
        let db = seeded_db();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let demographics = gender_demographics(&*db, today).unwrap();

        assert_eq!(
            demographics,
            vec![
                GenderDemographics {
                    gender_id: 1,
                    gender: "Male".to_string(),
                    patient_count: 2,
                    average_age: Some(41.5),
                },
                GenderDemographics {
                    gender_id: 2,
                    gender: "Female".to_string(),
                    patient_count: 1,
                    average_age: Some(33.0),
                },
            ]
        );
    }

    #[test]
    fn test_demographics_without_birth_dates() {
        let db = seeded_db();
        let mut patient = NewPatient::new("Ann", "Lee");
        patient.gender_id = Some(2);
        patient.insert(&*db).unwrap();
        NewPatient::new("No", "Gender").insert(&*db).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let demographics = gender_demographics(&*db, today).unwrap();
        assert_eq!(demographics[1].patient_count, 2);
        assert_eq!(demographics[1].average_age, Some(33.0));
        assert_eq!(demographics.iter().map(|g| g.patient_count).sum::<i64>(), 4);
    }

    #[test]
    fn test_room_availability_shows_occupants() {
        let db = seeded_db();
        let rooms = room_availability(&*db, None, false).unwrap();

        let order: Vec<_> = rooms.iter().map(|r| r.room_number.as_str()).collect();
        assert_eq!(order, vec!["301", "101", "102", "201", "202"]);

        let general = rooms.iter().find(|r| r.room_number == "101").unwrap();
        assert_eq!(general.status, RoomStatus::Occupied);
        assert_eq!(general.occupant.as_deref(), Some("John Doe"));

        let icu = rooms.iter().find(|r| r.room_number == "201").unwrap();
        assert_eq!(icu.occupant.as_deref(), Some("Robert Johnson"));
    }

    #[test]
    fn test_room_availability_filters() {
        let db = seeded_db();

        let available = room_availability(&*db, None, true).unwrap();
        assert_eq!(available.len(), 3);
        assert!(available.iter().all(|r| r.occupant.is_none()));

        let general = room_availability(&*db, Some("general"), true).unwrap();
        assert_eq!(general.len(), 1);
        assert_eq!(general[0].room_number, "102");
    }

    #[test]
    fn test_dashboard() {
        let db = seeded_db();
        let dashboard = dashboard(&*db, "2024-03-01").unwrap();

        assert_eq!(
            dashboard,
            Dashboard {
                date: "2024-03-01".to_string(),
                total_patients: 3,
                appointments_on_date: 2,
                current_admissions: 2,
                available_rooms: 3,
            }
        );
    }

    #[test]
    fn test_dashboard_empty_database() {
        let db = setup_test_db();
        let dashboard = dashboard(&*db, "2024-03-01").unwrap();
        assert_eq!(dashboard.total_patients, 0);
        assert_eq!(dashboard.available_rooms, 0);
    }
}
