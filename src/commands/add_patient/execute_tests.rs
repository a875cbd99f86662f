//! Execute tests for add-patient command.

#[cfg(test)]
mod tests {
    use super::super::AddPatientCmd;
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: populated_db,
        fixture_type: seeded,
    }

    fn cmd(first_name: &str, last_name: &str) -> AddPatientCmd {
        AddPatientCmd {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            gender_id: None,
            dob: None,
            phone: None,
            email: None,
            address: None,
        }
    }

    crate::execute_test! {
        test_name: test_add_minimal_patient,
        fixture: populated_db,
        cmd: cmd("Ann", "Lee"),
        assertions: |result| {
            assert_eq!(result.patient_id, 4);
            assert_eq!(result.full_name(), "Ann Lee");
            assert_eq!(result.gender_id, None);
            assert!(!result.created_date.is_empty());
        },
    }

    crate::execute_test! {
        test_name: test_add_full_patient,
        fixture: populated_db,
        cmd: AddPatientCmd {
            gender_id: Some(2),
            dob: Some("1990-08-22".to_string()),
            phone: Some("5551234567".to_string()),
            email: Some("ann@example.com".to_string()),
            address: Some("12 Elm St".to_string()),
            ..cmd("Ann", "Lee")
        },
        assertions: |result| {
            assert_eq!(result.gender_id, Some(2));
            assert_eq!(result.date_of_birth.as_deref(), Some("1990-08-22"));
            assert_eq!(result.email.as_deref(), Some("ann@example.com"));
        },
    }

    crate::execute_test! {
        test_name: test_blank_optionals_stored_as_null,
        fixture: populated_db,
        cmd: AddPatientCmd {
            email: Some("  ".to_string()),
            address: Some(String::new()),
            ..cmd("Ann", "Lee")
        },
        assertions: |result| {
            assert_eq!(result.email, None);
            assert_eq!(result.address, None);
        },
    }

    crate::execute_error_test! {
        test_name: test_missing_last_name,
        fixture: populated_db,
        cmd: cmd("Ann", " "),
        contains: "patient.last_name is required",
    }

    crate::execute_error_test! {
        test_name: test_unknown_gender,
        fixture: populated_db,
        cmd: AddPatientCmd {
            gender_id: Some(99),
            ..cmd("Ann", "Lee")
        },
        contains: "references a missing gender row",
    }

    crate::execute_error_test! {
        test_name: test_bad_email,
        fixture: populated_db,
        cmd: AddPatientCmd {
            email: Some("not-an-email".to_string()),
            ..cmd("Ann", "Lee")
        },
        contains: "Invalid email address",
    }

    crate::execute_error_test! {
        test_name: test_future_birth_date,
        fixture: populated_db,
        cmd: AddPatientCmd {
            dob: Some("2999-01-01".to_string()),
            ..cmd("Ann", "Lee")
        },
        contains: "is in the future",
    }

    crate::execute_empty_db_test! {
        cmd_type: AddPatientCmd,
        cmd: cmd("Ann", "Lee"),
    }
}
