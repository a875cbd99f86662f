//! The four reporting views.
//!
//! Each view is recomputed from the base relations on every call. Optional
//! references (gender, department) are resolved through a pair of helper rules,
//! one joining the referenced row and one yielding null when the reference is
//! null, so every base row appears exactly once.

use std::error::Error;

use clap::ValueEnum;
use serde::Serialize;

use crate::db::{
    get_i64, get_opt_string, get_parsed, get_string, int_value, str_value, DatabaseBackend, DbError,
    Params, RowMap,
};
use crate::queries::builder::{CompiledQuery, QueryBuilder};
use crate::types::{AdmissionStatus, AppointmentStatus};
use crate::utils::OptionalConditionBuilder;

/// Which view to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewName {
    /// patient_details
    Patients,
    /// doctor_details
    Doctors,
    /// appointment_details
    Appointments,
    /// admission_details
    Admissions,
}

impl ViewName {
    pub fn relation_name(&self) -> &'static str {
        match self {
            ViewName::Patients => "patient_details",
            ViewName::Doctors => "doctor_details",
            ViewName::Appointments => "appointment_details",
            ViewName::Admissions => "admission_details",
        }
    }
}

impl std::fmt::Display for ViewName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.relation_name())
    }
}

/// Row filters. Filters on columns a view does not have are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub status: Option<String>,
    /// Case-insensitive substring of the person names in the view.
    pub name: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientDetails {
    pub patient_id: i64,
    pub patient_name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorDetails {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub gender: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub created_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentDetails {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub department: Option<String>,
    pub appointment_date: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionDetails {
    pub admission_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub admission_date: String,
    pub discharge_date: Option<String>,
    pub status: AdmissionStatus,
}

/// Query builder for one of the views.
#[derive(Debug, Clone)]
pub struct DetailsQuery {
    pub view: ViewName,
    pub filter: ViewFilter,
}

const PATIENT_GENDER_RULES: &str = r#"gender_of[patient_id, gender] := *patient{patient_id, gender_id}, *gender{gender_id, name: gender}
gender_of[patient_id, gender] := *patient{patient_id, gender_id}, is_null(gender_id), gender = null"#;

const DOCTOR_GENDER_RULES: &str = r#"gender_of[doctor_id, gender] := *doctor{doctor_id, gender_id}, *gender{gender_id, name: gender}
gender_of[doctor_id, gender] := *doctor{doctor_id, gender_id}, is_null(gender_id), gender = null"#;

const DOCTOR_DEPARTMENT_RULES: &str = r#"department_of[doctor_id, department] := *doctor{doctor_id, department_id}, *department{department_id, name: department}
department_of[doctor_id, department] := *doctor{doctor_id, department_id}, is_null(department_id), department = null"#;

impl DetailsQuery {
    pub fn new(view: ViewName, filter: ViewFilter) -> Self {
        Self { view, filter }
    }

    fn condition(&self, field: &str, param: &str, has_value: bool) -> String {
        OptionalConditionBuilder::new(field, param)
            .with_leading_comma()
            .build(has_value)
    }

    fn name_condition(&self, field: &str) -> String {
        OptionalConditionBuilder::new(field, "name")
            .with_substring()
            .with_leading_comma()
            .build(self.filter.name.is_some())
    }

    fn tail(&self, key: &str) -> String {
        match self.filter.limit {
            Some(limit) => format!("\n:order {}\n:limit {}", key, limit),
            None => format!("\n:order {}", key),
        }
    }

    fn compile_patients(&self) -> String {
        format!(
            r#"{PATIENT_GENDER_RULES}
?[patient_id, patient_name, gender, date_of_birth, contact_number, email, address, created_date] :=
    *patient{{patient_id, first_name, last_name, date_of_birth, contact_number, email, address, created_date}},
    gender_of[patient_id, gender],
    patient_name = concat(first_name, ' ', last_name){}{}{}"#,
            self.condition("patient_id", "patient_id", self.filter.patient_id.is_some()),
            self.name_condition("patient_name"),
            self.tail("patient_id"),
        )
    }

    fn compile_doctors(&self) -> String {
        format!(
            r#"{DOCTOR_GENDER_RULES}
{DOCTOR_DEPARTMENT_RULES}
?[doctor_id, doctor_name, gender, department, specialization, contact_number, email, created_date] :=
    *doctor{{doctor_id, first_name, last_name, specialization, contact_number, email, created_date}},
    gender_of[doctor_id, gender],
    department_of[doctor_id, department],
    doctor_name = concat(first_name, ' ', last_name){}{}{}"#,
            self.condition("doctor_id", "doctor_id", self.filter.doctor_id.is_some()),
            self.name_condition("doctor_name"),
            self.tail("doctor_id"),
        )
    }

    fn compile_appointments(&self) -> String {
        format!(
            r#"{DOCTOR_DEPARTMENT_RULES}
?[appointment_id, patient_id, patient_name, doctor_id, doctor_name, department, appointment_date, status] :=
    *appointment{{appointment_id, patient_id, doctor_id, appointment_date, status}},
    *patient{{patient_id, first_name: p_first, last_name: p_last}},
    *doctor{{doctor_id, first_name: d_first, last_name: d_last}},
    department_of[doctor_id, department],
    patient_name = concat(p_first, ' ', p_last),
    doctor_name = concat(d_first, ' ', d_last){}{}{}{}{}"#,
            self.condition("patient_id", "patient_id", self.filter.patient_id.is_some()),
            self.condition("doctor_id", "doctor_id", self.filter.doctor_id.is_some()),
            self.condition("status", "status", self.filter.status.is_some()),
            self.name_condition("concat(patient_name, ' ', doctor_name)"),
            self.tail("appointment_id"),
        )
    }

    fn compile_admissions(&self) -> String {
        format!(
            r#"?[admission_id, patient_id, patient_name, doctor_id, doctor_name, room_id, room_number, room_type, admission_date, discharge_date, status] :=
    *admission{{admission_id, patient_id, doctor_id, room_id, admission_date, discharge_date, status}},
    *patient{{patient_id, first_name: p_first, last_name: p_last}},
    *doctor{{doctor_id, first_name: d_first, last_name: d_last}},
    *room{{room_id, room_number, room_type}},
    patient_name = concat(p_first, ' ', p_last),
    doctor_name = concat(d_first, ' ', d_last){}{}{}{}{}"#,
            self.condition("patient_id", "patient_id", self.filter.patient_id.is_some()),
            self.condition("doctor_id", "doctor_id", self.filter.doctor_id.is_some()),
            self.condition("status", "status", self.filter.status.is_some()),
            self.name_condition("concat(patient_name, ' ', doctor_name)"),
            self.tail("admission_id"),
        )
    }

    /// Run and return rows keyed by column name.
    pub fn fetch(&self, db: &dyn DatabaseBackend) -> Result<Vec<RowMap>, Box<dyn Error>> {
        let result = CompiledQuery::from_builder(self).execute(db)?;
        Ok(result.row_maps())
    }
}

impl QueryBuilder for DetailsQuery {
    fn compile(&self) -> String {
        match self.view {
            ViewName::Patients => self.compile_patients(),
            ViewName::Doctors => self.compile_doctors(),
            ViewName::Appointments => self.compile_appointments(),
            ViewName::Admissions => self.compile_admissions(),
        }
    }

    fn parameters(&self) -> Params {
        let mut params = Params::new();
        if let Some(id) = self.filter.patient_id {
            params.insert("patient_id".to_string(), int_value(id));
        }
        if let Some(id) = self.filter.doctor_id {
            params.insert("doctor_id".to_string(), int_value(id));
        }
        if let Some(status) = &self.filter.status {
            params.insert("status".to_string(), str_value(status));
        }
        if let Some(name) = &self.filter.name {
            params.insert("name".to_string(), str_value(&name.to_lowercase()));
        }
        params
    }
}

fn decode<T>(rows: Vec<RowMap>, f: fn(&RowMap) -> Result<T, DbError>) -> Result<Vec<T>, Box<dyn Error>> {
    rows.iter()
        .map(|row| f(row).map_err(Box::<dyn Error>::from))
        .collect()
}

/// `patient_details`: one row per patient.
pub fn patient_details(db: &dyn DatabaseBackend, filter: &ViewFilter) -> Result<Vec<PatientDetails>, Box<dyn Error>> {
    let rows = DetailsQuery::new(ViewName::Patients, filter.clone()).fetch(db)?;
    decode(rows, |row| {
        Ok(PatientDetails {
            patient_id: get_i64(row, "patient_id")?,
            patient_name: get_string(row, "patient_name")?,
            gender: get_opt_string(row, "gender"),
            date_of_birth: get_opt_string(row, "date_of_birth"),
            contact_number: get_opt_string(row, "contact_number"),
            email: get_opt_string(row, "email"),
            address: get_opt_string(row, "address"),
            created_date: get_string(row, "created_date")?,
        })
    })
}

/// `doctor_details`: one row per doctor.
pub fn doctor_details(db: &dyn DatabaseBackend, filter: &ViewFilter) -> Result<Vec<DoctorDetails>, Box<dyn Error>> {
    let rows = DetailsQuery::new(ViewName::Doctors, filter.clone()).fetch(db)?;
    decode(rows, |row| {
        Ok(DoctorDetails {
            doctor_id: get_i64(row, "doctor_id")?,
            doctor_name: get_string(row, "doctor_name")?,
            gender: get_opt_string(row, "gender"),
            department: get_opt_string(row, "department"),
            specialization: get_opt_string(row, "specialization"),
            contact_number: get_opt_string(row, "contact_number"),
            email: get_opt_string(row, "email"),
            created_date: get_string(row, "created_date")?,
        })
    })
}

/// `appointment_details`: one row per appointment.
pub fn appointment_details(
    db: &dyn DatabaseBackend,
    filter: &ViewFilter,
) -> Result<Vec<AppointmentDetails>, Box<dyn Error>> {
    let rows = DetailsQuery::new(ViewName::Appointments, filter.clone()).fetch(db)?;
    decode(rows, |row| {
        Ok(AppointmentDetails {
            appointment_id: get_i64(row, "appointment_id")?,
            patient_id: get_i64(row, "patient_id")?,
            patient_name: get_string(row, "patient_name")?,
            doctor_id: get_i64(row, "doctor_id")?,
            doctor_name: get_string(row, "doctor_name")?,
            department: get_opt_string(row, "department"),
            appointment_date: get_string(row, "appointment_date")?,
            status: get_parsed(row, "status")?,
        })
    })
}

/// `admission_details`: one row per admission.
pub fn admission_details(
    db: &dyn DatabaseBackend,
    filter: &ViewFilter,
) -> Result<Vec<AdmissionDetails>, Box<dyn Error>> {
    let rows = DetailsQuery::new(ViewName::Admissions, filter.clone()).fetch(db)?;
    decode(rows, |row| {
        Ok(AdmissionDetails {
            admission_id: get_i64(row, "admission_id")?,
            patient_id: get_i64(row, "patient_id")?,
            patient_name: get_string(row, "patient_name")?,
            doctor_id: get_i64(row, "doctor_id")?,
            doctor_name: get_string(row, "doctor_name")?,
            room_id: get_i64(row, "room_id")?,
            room_number: get_string(row, "room_number")?,
            room_type: get_string(row, "room_type")?,
            admission_date: get_string(row, "admission_date")?,
            discharge_date: get_opt_string(row, "discharge_date"),
            status: get_parsed(row, "status")?,
        })
    })
}
