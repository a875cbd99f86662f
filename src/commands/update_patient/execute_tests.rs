//! Execute tests for update-patient command.

#[cfg(test)]
mod tests {
    use super::super::UpdatePatientCmd;
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: populated_db,
        fixture_type: seeded,
    }

    fn cmd(id: i64) -> UpdatePatientCmd {
        UpdatePatientCmd {
            id,
            first_name: None,
            last_name: None,
            gender_id: None,
            dob: None,
            phone: None,
            email: None,
            address: None,
        }
    }

    crate::execute_test! {
        test_name: test_update_email_only,
        fixture: populated_db,
        cmd: UpdatePatientCmd {
            email: Some("jane.s@example.com".to_string()),
            ..cmd(2)
        },
        assertions: |result| {
            assert_eq!(result.patient_id, 2);
            assert_eq!(result.full_name(), "Jane Smith");
            assert_eq!(result.gender_id, Some(2));
            assert_eq!(result.email.as_deref(), Some("jane.s@example.com"));
        },
    }

    crate::execute_test! {
        test_name: test_rename_and_move_gender,
        fixture: populated_db,
        cmd: UpdatePatientCmd {
            first_name: Some(" Johnny ".to_string()),
            gender_id: Some(2),
            ..cmd(1)
        },
        assertions: |result| {
            assert_eq!(result.full_name(), "Johnny Doe");
            assert_eq!(result.gender_id, Some(2));
        },
    }

    crate::execute_test! {
        test_name: test_empty_value_clears_field,
        fixture: populated_db,
        cmd: UpdatePatientCmd {
            address: Some("  ".to_string()),
            ..cmd(1)
        },
        assertions: |result| {
            assert_eq!(result.address, None);
            assert_eq!(result.last_name, "Doe");
        },
    }

    crate::execute_error_test! {
        test_name: test_unknown_patient,
        fixture: populated_db,
        cmd: UpdatePatientCmd {
            email: Some("ghost@example.com".to_string()),
            ..cmd(9)
        },
        contains: "patient 9 not found",
    }

    crate::execute_error_test! {
        test_name: test_unknown_gender,
        fixture: populated_db,
        cmd: UpdatePatientCmd { gender_id: Some(99), ..cmd(1) },
        contains: "references a missing gender row",
    }

    crate::execute_error_test! {
        test_name: test_bad_email,
        fixture: populated_db,
        cmd: UpdatePatientCmd {
            email: Some("not-an-email".to_string()),
            ..cmd(1)
        },
        contains: "Invalid email address",
    }

    crate::execute_error_test! {
        test_name: test_future_birth_date,
        fixture: populated_db,
        cmd: UpdatePatientCmd {
            dob: Some("2999-01-01".to_string()),
            ..cmd(1)
        },
        contains: "is in the future",
    }

    crate::execute_error_test! {
        test_name: test_blank_last_name,
        fixture: populated_db,
        cmd: UpdatePatientCmd {
            last_name: Some(String::new()),
            ..cmd(1)
        },
        contains: "patient.last_name is required",
    }
}
