//! Execute tests for dashboard command.

#[cfg(test)]
mod tests {
    use super::super::DashboardCmd;
    use crate::output::Outputable;
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: populated_db,
        fixture_type: seeded,
    }

    crate::shared_fixture! {
        fixture_name: empty_schema,
        fixture_type: migrated,
    }

    crate::execute_test! {
        test_name: test_seeded_day,
        fixture: populated_db,
        cmd: DashboardCmd { date: Some("2024-03-01".to_string()) },
        assertions: |result| {
            assert_eq!(result.total_patients, 3);
            assert_eq!(result.appointments_on_date, 2);
            assert_eq!(result.current_admissions, 2);
            assert_eq!(result.available_rooms, 3);
            assert_eq!(
                result.to_table(),
                "Dashboard for 2024-03-01\n  Patients:           3\n  Appointments today: 2\n  Current admissions: 2\n  Available rooms:    3"
            );
        },
    }

    crate::execute_test! {
        test_name: test_defaults_to_today,
        fixture: populated_db,
        cmd: DashboardCmd { date: None },
        assertions: |result| {
            assert_eq!(result.date, crate::utils::today());
        },
    }

    crate::execute_test! {
        test_name: test_empty_schema_is_all_zero,
        fixture: empty_schema,
        cmd: DashboardCmd { date: Some("2024-03-01".to_string()) },
        assertions: |result| {
            assert_eq!(result.total_patients, 0);
            assert_eq!(result.appointments_on_date, 0);
            assert_eq!(result.current_admissions, 0);
            assert_eq!(result.available_rooms, 0);
        },
    }

    crate::execute_error_test! {
        test_name: test_bad_date,
        fixture: populated_db,
        cmd: DashboardCmd { date: Some("03/01/2024".to_string()) },
        contains: "Invalid dashboard date '03/01/2024'",
    }
}
