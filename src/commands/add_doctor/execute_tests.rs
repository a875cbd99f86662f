//! Execute tests for add-doctor command.

#[cfg(test)]
mod tests {
    use super::super::AddDoctorCmd;
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: populated_db,
        fixture_type: seeded,
    }

    fn cmd() -> AddDoctorCmd {
        AddDoctorCmd {
            first_name: "Sam".to_string(),
            last_name: "Ortiz".to_string(),
            gender_id: Some(1),
            department_id: Some(3),
            specialization: Some("Sports Medicine".to_string()),
            phone: None,
            email: None,
        }
    }

    crate::execute_test! {
        test_name: test_add_doctor,
        fixture: populated_db,
        cmd: cmd(),
        assertions: |result| {
            assert_eq!(result.doctor_id, 4);
            assert_eq!(result.department_id, Some(3));
            assert_eq!(result.full_name(), "Sam Ortiz");
        },
    }

    crate::execute_test! {
        test_name: test_add_doctor_without_department,
        fixture: populated_db,
        cmd: AddDoctorCmd { department_id: None, ..cmd() },
        assertions: |result| {
            assert_eq!(result.department_id, None);
        },
    }

    crate::execute_error_test! {
        test_name: test_unknown_department,
        fixture: populated_db,
        cmd: AddDoctorCmd { department_id: Some(42), ..cmd() },
        contains: "doctor.department_id = 42 references a missing department row",
    }

    crate::execute_error_test! {
        test_name: test_bad_phone,
        fixture: populated_db,
        cmd: AddDoctorCmd { phone: Some("12-34".to_string()), ..cmd() },
        contains: "Invalid phone number",
    }
}
