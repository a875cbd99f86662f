//! CLI parsing tests for update-doctor command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "update-doctor",
        test_name: test_requires_id,
        required_arg: "--id",
    }

    crate::cli_defaults_test! {
        command: "update-doctor",
        variant: UpdateDoctor,
        required_args: ["--id", "1"],
        defaults: {
            first_name: None,
            gender_id: None,
            department_id: None,
            specialization: None,
            phone: None,
            email: None,
        },
    }

    crate::cli_option_test_with_required! {
        command: "update-doctor",
        variant: UpdateDoctor,
        required_args: ["--id", "3"],
        test_name: test_with_department_id,
        args: ["--department-id", "5"],
        field: department_id,
        expected: Some(5),
    }
}
