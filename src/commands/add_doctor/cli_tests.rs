//! CLI parsing tests for add-doctor command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "add-doctor",
        test_name: test_requires_last_name,
        required_arg: "--last-name",
    }

    crate::cli_option_test_with_required! {
        command: "add-doctor",
        variant: AddDoctor,
        required_args: ["--first-name", "Emily", "--last-name", "Brown"],
        test_name: test_with_department_id,
        args: ["--department-id", "1"],
        field: department_id,
        expected: Some(1),
    }

    crate::cli_option_test_with_required! {
        command: "add-doctor",
        variant: AddDoctor,
        required_args: ["--first-name", "Emily", "--last-name", "Brown"],
        test_name: test_with_specialization,
        args: ["--specialization", "Interventional Cardiology"],
        field: specialization,
        expected: Some("Interventional Cardiology".to_string()),
    }
}
