//! Execute tests for add-lookup command.

#[cfg(test)]
mod tests {
    use super::super::{AddLookupCmd, LookupKind};
    use crate::types::Department;
    use crate::queries::records;
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: empty_schema,
        fixture_type: migrated,
    }

    crate::shared_fixture! {
        fixture_name: populated_db,
        fixture_type: seeded,
    }

    crate::execute_test! {
        test_name: test_add_first_gender,
        fixture: empty_schema,
        cmd: AddLookupCmd {
            kind: LookupKind::Gender,
            name: "Female".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.id, 1);
            assert_eq!(result.name, "Female");
        },
    }

    crate::execute_test! {
        test_name: test_add_department_after_seed,
        fixture: populated_db,
        cmd: AddLookupCmd {
            kind: LookupKind::Department,
            name: "  Oncology ".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.id, 6);
            assert_eq!(result.name, "Oncology");
        },
    }

    #[rstest]
    fn test_department_is_stored(empty_schema: Box<dyn crate::db::DatabaseBackend>) {
        use crate::commands::Execute;
        AddLookupCmd {
            kind: LookupKind::Department,
            name: "Cardiology".to_string(),
        }
        .execute(&*empty_schema)
        .unwrap();

        let departments: Vec<Department> = records::list(&*empty_schema).unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].name, "Cardiology");
    }

    crate::execute_error_test! {
        test_name: test_blank_name_rejected,
        fixture: empty_schema,
        cmd: AddLookupCmd {
            kind: LookupKind::Gender,
            name: "   ".to_string(),
        },
        contains: "gender.name is required",
    }

    crate::execute_empty_db_test! {
        cmd_type: AddLookupCmd,
        cmd: AddLookupCmd {
            kind: LookupKind::Gender,
            name: "Female".to_string(),
        },
    }
}
