//! Execute tests for book command.

#[cfg(test)]
mod tests {
    use super::super::BookCmd;
    use crate::types::AppointmentStatus;
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: populated_db,
        fixture_type: seeded,
    }

    fn cmd(patient_id: i64, doctor_id: i64, date: &str) -> BookCmd {
        BookCmd {
            patient_id,
            doctor_id,
            date: date.to_string(),
        }
    }

    crate::execute_test! {
        test_name: test_book_normalizes_date,
        fixture: populated_db,
        cmd: cmd(2, 1, "2024-03-05T11:00"),
        assertions: |result| {
            assert_eq!(result.appointment_id, 4);
            assert_eq!(result.appointment_date, "2024-03-05 11:00:00");
            assert_eq!(result.status, AppointmentStatus::Scheduled);
        },
    }

    // Emily Brown already sees John Doe at 09:00 on 2024-03-01.
    crate::execute_error_test! {
        test_name: test_same_hour_rejected,
        fixture: populated_db,
        cmd: cmd(2, 1, "2024-03-01 09:45"),
        contains: "already has an appointment",
    }

    crate::execute_test! {
        test_name: test_next_hour_allowed,
        fixture: populated_db,
        cmd: cmd(2, 1, "2024-03-01 10:00"),
        assertions: |result| {
            assert_eq!(result.doctor_id, 1);
        },
    }

    crate::execute_error_test! {
        test_name: test_unknown_patient,
        fixture: populated_db,
        cmd: cmd(9, 1, "2024-03-05 11:00"),
        contains: "appointment.patient_id = 9 references a missing patient row",
    }

    crate::execute_error_test! {
        test_name: test_unparseable_date,
        fixture: populated_db,
        cmd: cmd(1, 1, "next tuesday"),
        contains: "Invalid date",
    }
}
