//! Execute tests for demographics command.

#[cfg(test)]
mod tests {
    use super::super::DemographicsCmd;
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
        test_name: test_seeded_demographics,
        fixture: populated_db,
        cmd: DemographicsCmd { date: Some("2024-03-01".to_string()) },
        assertions: |result| {
            assert_eq!(result.date, "2024-03-01");
            let summary: Vec<_> = result
                .genders
                .iter()
                .map(|g| (g.gender.as_str(), g.patient_count, g.average_age))
                .collect();
            assert_eq!(summary, vec![("Male", 2, Some(41.5)), ("Female", 1, Some(33.0))]);
        },
    }

    crate::execute_test! {
        test_name: test_defaults_to_today,
        fixture: populated_db,
        cmd: DemographicsCmd { date: None },
        assertions: |result| {
            assert_eq!(result.date, crate::utils::today());
            assert_eq!(result.genders.len(), 2);
        },
    }

    crate::execute_error_test! {
        test_name: test_invalid_date,
        fixture: populated_db,
        cmd: DemographicsCmd { date: Some("03/01/2024".to_string()) },
        contains: "Invalid demographics date '03/01/2024'",
    }

    crate::execute_no_match_test! {
        test_name: test_no_genders,
        fixture: empty_schema,
        cmd: DemographicsCmd { date: None },
        empty_field: genders,
    }
}
