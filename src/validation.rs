//! Contact and date checks applied to people before they are stored.
//!
//! These run in the command layer on top of the integrity checks: the schema
//! only knows that `email` is text, not what an address looks like.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::types::{NewDoctor, NewPatient};
use crate::utils::parse_date;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Optional leading `+` and `1`, then 9 to 15 digits.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?1?\d{9,15}$").unwrap());

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid email address '{0}'")]
    Email(String),

    #[error("Invalid phone number '{0}' (expected 9-15 digits, optional leading +)")]
    Phone(String),

    #[error("Invalid date of birth '{0}' (expected YYYY-MM-DD)")]
    DateFormat(String),

    #[error("Date of birth {0} is in the future")]
    FutureBirthDate(String),
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::Email(email.to_string()))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::Phone(phone.to_string()))
    }
}

/// Parse a date of birth and reject dates after `today`.
pub fn validate_birth_date(date: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let parsed = parse_date(date).ok_or_else(|| ValidationError::DateFormat(date.to_string()))?;
    if parsed > today {
        return Err(ValidationError::FutureBirthDate(date.to_string()));
    }
    Ok(parsed)
}

fn validate_contact(email: Option<&str>, phone: Option<&str>) -> Result<(), ValidationError> {
    if let Some(email) = email {
        validate_email(email)?;
    }
    if let Some(phone) = phone {
        validate_phone(phone)?;
    }
    Ok(())
}

pub fn validate_patient(patient: &NewPatient, today: NaiveDate) -> Result<(), ValidationError> {
    validate_contact(patient.email.as_deref(), patient.contact_number.as_deref())?;
    if let Some(dob) = &patient.date_of_birth {
        validate_birth_date(dob, today)?;
    }
    Ok(())
}

pub fn validate_doctor(doctor: &NewDoctor) -> Result<(), ValidationError> {
    validate_contact(doctor.email.as_deref(), doctor.contact_number.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[rstest]
    #[case("john.doe@example.com")]
    #[case("a+b@sub.hospital.org")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(validate_email(email).is_ok());
    }

    #[rstest]
    #[case("john.doe")]
    #[case("john@localhost")]
    #[case("@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert_eq!(validate_email(email), Err(ValidationError::Email(email.to_string())));
    }

    #[rstest]
    #[case("5551234567", true)]
    #[case("+15551234567", true)]
    #[case("12345678", false)]
    #[case("555-123-4567", false)]
    #[case("2345678901234567", false)]
    #[case("1234567890123456", true)]
    fn test_phone(#[case] phone: &str, #[case] valid: bool) {
        assert_eq!(validate_phone(phone).is_ok(), valid);
    }

    #[test]
    fn test_birth_date() {
        assert!(validate_birth_date("1985-06-15", today()).is_ok());
        assert!(validate_birth_date("2024-03-01", today()).is_ok());
        assert_eq!(
            validate_birth_date("2024-03-02", today()),
            Err(ValidationError::FutureBirthDate("2024-03-02".to_string()))
        );
        assert!(matches!(
            validate_birth_date("15/06/1985", today()),
            Err(ValidationError::DateFormat(_))
        ));
    }

    #[test]
    fn test_validate_patient_checks_every_field() {
        let mut patient = NewPatient::new("John", "Doe");
        assert!(validate_patient(&patient, today()).is_ok());

        patient.contact_number = Some("555".to_string());
        assert!(matches!(validate_patient(&patient, today()), Err(ValidationError::Phone(_))));

        patient.contact_number = None;
        patient.date_of_birth = Some("2030-01-01".to_string());
        assert!(matches!(
            validate_patient(&patient, today()),
            Err(ValidationError::FutureBirthDate(_))
        ));
    }

    #[test]
    fn test_validate_doctor_email() {
        let mut doctor = NewDoctor::new("Emily", "Brown");
        doctor.email = Some("emily.brown".to_string());
        assert!(matches!(validate_doctor(&doctor), Err(ValidationError::Email(_))));
    }
}
