//! Appointment and admission workflows.
//!
//! These are the only paths that move a status column. Each operation checks
//! its preconditions, then writes through `records` so the integrity checks
//! still apply. Admission and discharge write the admission row and its room
//! in one chained script.

use std::error::Error;

use thiserror::Error;
use tracing::{info, warn};

use crate::db::schema::{ADMISSION, APPOINTMENT, ROOM};
use crate::db::{extract_i64, int_value, str_value, DatabaseBackend, Params, RowMap};
use crate::queries::records;
use crate::types::{
    Admission, AdmissionStatus, Appointment, AppointmentStatus, NewAdmission, NewAppointment,
    NewRecord, Room, RoomStatus,
};
use crate::utils::{hour_slot, normalize_timestamp, parse_timestamp};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("Cannot move {entity} {id} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        id: i64,
        from: String,
        to: String,
    },

    #[error("Doctor {doctor_id} already has an appointment in the {slot}:00 hour")]
    SlotTaken { doctor_id: i64, slot: String },

    #[error("Room {room_number} is not available (status: {status})")]
    RoomUnavailable { room_number: String, status: RoomStatus },

    #[error("Discharge date {discharge_date} is before admission date {admission_date}")]
    DischargeBeforeAdmission {
        admission_date: String,
        discharge_date: String,
    },

    #[error("Invalid date '{0}' (expected YYYY-MM-DD HH:MM[:SS])")]
    InvalidDate(String),
}

fn normalize(input: &str) -> Result<String, WorkflowError> {
    normalize_timestamp(input).ok_or_else(|| WorkflowError::InvalidDate(input.to_string()))
}

/// Ids of the doctor's appointments in `slot` that are not cancelled.
fn appointments_in_slot(
    db: &dyn DatabaseBackend,
    doctor_id: i64,
    slot: &str,
) -> Result<Vec<i64>, Box<dyn Error>> {
    let script = r#"
        ?[appointment_id] :=
            *appointment{appointment_id, doctor_id, appointment_date, status},
            doctor_id == $doctor_id,
            starts_with(appointment_date, $slot),
            status != $cancelled
    "#;

    let mut params = Params::new();
    params.insert("doctor_id".to_string(), int_value(doctor_id));
    params.insert("slot".to_string(), str_value(slot));
    params.insert("cancelled".to_string(), str_value(AppointmentStatus::Cancelled.as_str()));

    let result = db.execute_query(script, &params)?;
    Ok(result
        .rows
        .iter()
        .filter_map(|row| row.first().map(|v| extract_i64(v, 0)))
        .collect())
}

/// Book a `Scheduled` appointment.
///
/// The date is normalized to storage format. A doctor holds at most one
/// non-cancelled appointment per calendar hour.
pub fn book_appointment(
    db: &dyn DatabaseBackend,
    request: &NewAppointment,
) -> Result<Appointment, Box<dyn Error>> {
    let appointment_date = normalize(&request.appointment_date)?;
    let slot = parse_timestamp(&appointment_date)
        .map(|ts| hour_slot(&ts))
        .ok_or_else(|| WorkflowError::InvalidDate(appointment_date.clone()))?;

    let clashes = appointments_in_slot(db, request.doctor_id, &slot)?;
    if !clashes.is_empty() {
        warn!(doctor_id = request.doctor_id, %slot, ?clashes, "slot already taken");
        return Err(WorkflowError::SlotTaken {
            doctor_id: request.doctor_id,
            slot,
        }
        .into());
    }

    let appointment = NewAppointment {
        appointment_date,
        ..request.clone()
    }
    .insert(db)?;

    info!(
        appointment_id = appointment.appointment_id,
        patient_id = appointment.patient_id,
        doctor_id = appointment.doctor_id,
        date = %appointment.appointment_date,
        "booked appointment"
    );
    Ok(appointment)
}

/// Move an appointment to `status`. Setting the current status again is a no-op.
pub fn set_appointment_status(
    db: &dyn DatabaseBackend,
    appointment_id: i64,
    status: AppointmentStatus,
) -> Result<Appointment, Box<dyn Error>> {
    let appointment: Appointment = records::fetch(db, appointment_id)?;
    if appointment.status == status {
        return Ok(appointment);
    }

    if !appointment.status.can_transition_to(status) {
        warn!(appointment_id, from = %appointment.status, to = %status, "rejected status change");
        return Err(WorkflowError::InvalidTransition {
            entity: "appointment",
            id: appointment_id,
            from: appointment.status.to_string(),
            to: status.to_string(),
        }
        .into());
    }

    let mut changes = RowMap::new();
    changes.insert("status".to_string(), str_value(status.as_str()));
    records::update(db, &APPOINTMENT, appointment_id, changes)?;

    info!(appointment_id, from = %appointment.status, to = %status, "appointment status changed");
    records::fetch(db, appointment_id)
}

fn room_status_change(status: RoomStatus) -> RowMap {
    let mut changes = RowMap::new();
    changes.insert("status".to_string(), str_value(status.as_str()));
    changes
}

/// Admit a patient into an available room and mark the room occupied.
pub fn admit_patient(
    db: &dyn DatabaseBackend,
    request: &NewAdmission,
) -> Result<Admission, Box<dyn Error>> {
    let admission_date = normalize(&request.admission_date)?;

    // A missing room is reported by the foreign key check below.
    let room: Option<Room> = records::get(db, request.room_id)?;
    if let Some(room) = &room {
        if room.status != RoomStatus::Available {
            warn!(room_id = room.room_id, status = %room.status, "room unavailable");
            return Err(WorkflowError::RoomUnavailable {
                room_number: room.room_number.clone(),
                status: room.status,
            }
            .into());
        }
    }

    let values = NewAdmission {
        admission_date,
        ..request.clone()
    }
    .values();
    let admission = records::prepare_insert(db, &ADMISSION, values)?;
    let room_write = records::prepare_update(db, &ROOM, request.room_id, room_status_change(RoomStatus::Occupied))?;
    records::commit(db, &[admission.clone(), room_write])?;

    info!(
        admission_id = admission.id,
        patient_id = request.patient_id,
        room_id = request.room_id,
        "admitted patient"
    );
    records::fetch(db, admission.id)
}

/// Discharge an admitted patient and free their room.
pub fn discharge_patient(
    db: &dyn DatabaseBackend,
    admission_id: i64,
    discharge_date: &str,
) -> Result<Admission, Box<dyn Error>> {
    let admission: Admission = records::fetch(db, admission_id)?;
    if !admission.status.can_transition_to(AdmissionStatus::Discharged) {
        warn!(admission_id, status = %admission.status, "rejected discharge");
        return Err(WorkflowError::InvalidTransition {
            entity: "admission",
            id: admission_id,
            from: admission.status.to_string(),
            to: AdmissionStatus::Discharged.to_string(),
        }
        .into());
    }

    let discharge_date = normalize(discharge_date)?;
    let admitted_at = parse_timestamp(&admission.admission_date);
    let discharged_at = parse_timestamp(&discharge_date);
    if let (Some(admitted_at), Some(discharged_at)) = (admitted_at, discharged_at) {
        if discharged_at < admitted_at {
            return Err(WorkflowError::DischargeBeforeAdmission {
                admission_date: admission.admission_date,
                discharge_date,
            }
            .into());
        }
    }

    let mut changes = RowMap::new();
    changes.insert("discharge_date".to_string(), str_value(&discharge_date));
    changes.insert("status".to_string(), str_value(AdmissionStatus::Discharged.as_str()));
    let admission_write = records::prepare_update(db, &ADMISSION, admission_id, changes)?;
    let room_write = records::prepare_update(db, &ROOM, admission.room_id, room_status_change(RoomStatus::Available))?;
    records::commit(db, &[admission_write, room_write])?;

    info!(admission_id, room_id = admission.room_id, %discharge_date, "discharged patient");
    records::fetch(db, admission_id)
}
