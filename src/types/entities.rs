//! Typed rows of the seven base relations and their insert payloads.

use std::error::Error;

use serde::Serialize;

use crate::db::schema::{
    SchemaRelation, ADMISSION, APPOINTMENT, DEPARTMENT, DOCTOR, GENDER, PATIENT, ROOM,
};
use crate::db::{
    get_i64, get_opt_i64, get_opt_string, get_parsed, get_string, int_value, opt_int_value,
    opt_str_value, str_value, DatabaseBackend, DbError, RowMap,
};
use crate::queries::records;

use super::status::{AdmissionStatus, AppointmentStatus, RoomStatus};

/// A stored row decodable from a relation.
pub trait Entity: Sized {
    /// Relation the entity is stored in.
    const RELATION: &'static SchemaRelation;

    /// Decode one row. Unknown status strings fail with `DbError::InvalidColumn`.
    fn from_row(row: &RowMap) -> Result<Self, DbError>;

    /// System-assigned identifier.
    fn id(&self) -> i64;
}

/// Column values for a row that has not been stored yet.
pub trait NewRecord {
    type Entity: Entity;

    /// Supplied columns. Omitted columns get their default or null.
    fn values(&self) -> RowMap;

    /// Insert through the integrity checks and read the stored row back.
    fn insert(&self, db: &dyn DatabaseBackend) -> Result<Self::Entity, Box<dyn Error>>
    where
        Self: Sized,
    {
        records::create(db, self)
    }
}

fn put(values: &mut RowMap, name: &str, value: cozo::DataValue) {
    values.insert(name.to_string(), value);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gender {
    pub gender_id: i64,
    pub name: String,
}

impl Entity for Gender {
    const RELATION: &'static SchemaRelation = &GENDER;

    fn from_row(row: &RowMap) -> Result<Self, DbError> {
        Ok(Self {
            gender_id: get_i64(row, "gender_id")?,
            name: get_string(row, "name")?,
        })
    }

    fn id(&self) -> i64 {
        self.gender_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Department {
    pub department_id: i64,
    pub name: String,
}

impl Entity for Department {
    const RELATION: &'static SchemaRelation = &DEPARTMENT;

    fn from_row(row: &RowMap) -> Result<Self, DbError> {
        Ok(Self {
            department_id: get_i64(row, "department_id")?,
            name: get_string(row, "name")?,
        })
    }

    fn id(&self) -> i64 {
        self.department_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    pub patient_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender_id: Option<i64>,
    pub date_of_birth: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_date: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Patient {
    const RELATION: &'static SchemaRelation = &PATIENT;

    fn from_row(row: &RowMap) -> Result<Self, DbError> {
        Ok(Self {
            patient_id: get_i64(row, "patient_id")?,
            first_name: get_string(row, "first_name")?,
            last_name: get_string(row, "last_name")?,
            gender_id: get_opt_i64(row, "gender_id"),
            date_of_birth: get_opt_string(row, "date_of_birth"),
            contact_number: get_opt_string(row, "contact_number"),
            email: get_opt_string(row, "email"),
            address: get_opt_string(row, "address"),
            created_date: get_string(row, "created_date")?,
        })
    }

    fn id(&self) -> i64 {
        self.patient_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub doctor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender_id: Option<i64>,
    pub department_id: Option<i64>,
    pub specialization: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub created_date: String,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Doctor {
    const RELATION: &'static SchemaRelation = &DOCTOR;

    fn from_row(row: &RowMap) -> Result<Self, DbError> {
        Ok(Self {
            doctor_id: get_i64(row, "doctor_id")?,
            first_name: get_string(row, "first_name")?,
            last_name: get_string(row, "last_name")?,
            gender_id: get_opt_i64(row, "gender_id"),
            department_id: get_opt_i64(row, "department_id"),
            specialization: get_opt_string(row, "specialization"),
            contact_number: get_opt_string(row, "contact_number"),
            email: get_opt_string(row, "email"),
            created_date: get_string(row, "created_date")?,
        })
    }

    fn id(&self) -> i64 {
        self.doctor_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub appointment_date: String,
    pub status: AppointmentStatus,
    pub created_date: String,
}

impl Entity for Appointment {
    const RELATION: &'static SchemaRelation = &APPOINTMENT;

    fn from_row(row: &RowMap) -> Result<Self, DbError> {
        Ok(Self {
            appointment_id: get_i64(row, "appointment_id")?,
            patient_id: get_i64(row, "patient_id")?,
            doctor_id: get_i64(row, "doctor_id")?,
            appointment_date: get_string(row, "appointment_date")?,
            status: get_parsed(row, "status")?,
            created_date: get_string(row, "created_date")?,
        })
    }

    fn id(&self) -> i64 {
        self.appointment_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub status: RoomStatus,
}

impl Entity for Room {
    const RELATION: &'static SchemaRelation = &ROOM;

    fn from_row(row: &RowMap) -> Result<Self, DbError> {
        Ok(Self {
            room_id: get_i64(row, "room_id")?,
            room_number: get_string(row, "room_number")?,
            room_type: get_string(row, "room_type")?,
            status: get_parsed(row, "status")?,
        })
    }

    fn id(&self) -> i64 {
        self.room_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Admission {
    pub admission_id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub room_id: i64,
    pub admission_date: String,
    pub discharge_date: Option<String>,
    pub status: AdmissionStatus,
    pub notes: Option<String>,
    pub created_date: String,
}

impl Entity for Admission {
    const RELATION: &'static SchemaRelation = &ADMISSION;

    fn from_row(row: &RowMap) -> Result<Self, DbError> {
        Ok(Self {
            admission_id: get_i64(row, "admission_id")?,
            patient_id: get_i64(row, "patient_id")?,
            doctor_id: get_i64(row, "doctor_id")?,
            room_id: get_i64(row, "room_id")?,
            admission_date: get_string(row, "admission_date")?,
            discharge_date: get_opt_string(row, "discharge_date"),
            status: get_parsed(row, "status")?,
            notes: get_opt_string(row, "notes"),
            created_date: get_string(row, "created_date")?,
        })
    }

    fn id(&self) -> i64 {
        self.admission_id
    }
}

// Insert payloads

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGender {
    pub name: String,
}

impl NewRecord for NewGender {
    type Entity = Gender;

    fn values(&self) -> RowMap {
        let mut values = RowMap::new();
        put(&mut values, "name", str_value(&self.name));
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewDepartment {
    pub name: String,
}

impl NewRecord for NewDepartment {
    type Entity = Department;

    fn values(&self) -> RowMap {
        let mut values = RowMap::new();
        put(&mut values, "name", str_value(&self.name));
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub gender_id: Option<i64>,
    pub date_of_birth: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl NewPatient {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }
}

impl NewRecord for NewPatient {
    type Entity = Patient;

    fn values(&self) -> RowMap {
        let mut values = RowMap::new();
        put(&mut values, "first_name", str_value(&self.first_name));
        put(&mut values, "last_name", str_value(&self.last_name));
        put(&mut values, "gender_id", opt_int_value(self.gender_id));
        put(&mut values, "date_of_birth", opt_str_value(self.date_of_birth.as_deref()));
        put(&mut values, "contact_number", opt_str_value(self.contact_number.as_deref()));
        put(&mut values, "email", opt_str_value(self.email.as_deref()));
        put(&mut values, "address", opt_str_value(self.address.as_deref()));
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewDoctor {
    pub first_name: String,
    pub last_name: String,
    pub gender_id: Option<i64>,
    pub department_id: Option<i64>,
    pub specialization: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
}

impl NewDoctor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }
}

impl NewRecord for NewDoctor {
    type Entity = Doctor;

    fn values(&self) -> RowMap {
        let mut values = RowMap::new();
        put(&mut values, "first_name", str_value(&self.first_name));
        put(&mut values, "last_name", str_value(&self.last_name));
        put(&mut values, "gender_id", opt_int_value(self.gender_id));
        put(&mut values, "department_id", opt_int_value(self.department_id));
        put(&mut values, "specialization", opt_str_value(self.specialization.as_deref()));
        put(&mut values, "contact_number", opt_str_value(self.contact_number.as_deref()));
        put(&mut values, "email", opt_str_value(self.email.as_deref()));
        values
    }
}

impl From<&Patient> for NewPatient {
    fn from(patient: &Patient) -> Self {
        Self {
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            gender_id: patient.gender_id,
            date_of_birth: patient.date_of_birth.clone(),
            contact_number: patient.contact_number.clone(),
            email: patient.email.clone(),
            address: patient.address.clone(),
        }
    }
}

impl From<&Doctor> for NewDoctor {
    fn from(doctor: &Doctor) -> Self {
        Self {
            first_name: doctor.first_name.clone(),
            last_name: doctor.last_name.clone(),
            gender_id: doctor.gender_id,
            department_id: doctor.department_id,
            specialization: doctor.specialization.clone(),
            contact_number: doctor.contact_number.clone(),
            email: doctor.email.clone(),
        }
    }
}

/// Appointment request. Stored as `Scheduled`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAppointment {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub appointment_date: String,
}

impl NewRecord for NewAppointment {
    type Entity = Appointment;

    fn values(&self) -> RowMap {
        let mut values = RowMap::new();
        put(&mut values, "patient_id", int_value(self.patient_id));
        put(&mut values, "doctor_id", int_value(self.doctor_id));
        put(&mut values, "appointment_date", str_value(&self.appointment_date));
        values
    }
}

/// Room definition. Stored as `Available`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
}

impl NewRecord for NewRoom {
    type Entity = Room;

    fn values(&self) -> RowMap {
        let mut values = RowMap::new();
        put(&mut values, "room_number", str_value(&self.room_number));
        put(&mut values, "room_type", str_value(&self.room_type));
        values
    }
}

/// Admission request. Stored as `Admitted` with no discharge date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAdmission {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub room_id: i64,
    pub admission_date: String,
    pub notes: Option<String>,
}

impl NewRecord for NewAdmission {
    type Entity = Admission;

    fn values(&self) -> RowMap {
        let mut values = RowMap::new();
        put(&mut values, "patient_id", int_value(self.patient_id));
        put(&mut values, "doctor_id", int_value(self.doctor_id));
        put(&mut values, "room_id", int_value(self.room_id));
        put(&mut values, "admission_date", str_value(&self.admission_date));
        put(&mut values, "notes", opt_str_value(self.notes.as_deref()));
        values
    }
}
