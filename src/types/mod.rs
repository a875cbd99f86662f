//! Shared types for hospital records.

mod entities;
mod status;

pub use entities::{
    Admission, Appointment, Department, Doctor, Entity, Gender, NewAdmission, NewAppointment,
    NewDepartment, NewDoctor, NewGender, NewPatient, NewRecord, NewRoom, Patient, Room,
};
pub use status::{AdmissionStatus, AppointmentStatus, RoomStatus, StatusParseError};
