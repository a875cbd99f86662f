//! CLI parsing tests for update-patient command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "update-patient",
        test_name: test_requires_id,
        required_arg: "--id",
    }

    crate::cli_defaults_test! {
        command: "update-patient",
        variant: UpdatePatient,
        required_args: ["--id", "1"],
        defaults: {
            first_name: None,
            last_name: None,
            gender_id: None,
            dob: None,
            phone: None,
            email: None,
            address: None,
        },
    }

    crate::cli_option_test_with_required! {
        command: "update-patient",
        variant: UpdatePatient,
        required_args: ["--id", "1"],
        test_name: test_with_email,
        args: ["--email", "john@example.com"],
        field: email,
        expected: Some("john@example.com".to_string()),
    }

    crate::cli_option_test_with_required! {
        command: "update-patient",
        variant: UpdatePatient,
        required_args: ["--id", "1"],
        test_name: test_empty_value_kept_for_clearing,
        args: ["--address", ""],
        field: address,
        expected: Some(String::new()),
    }

    crate::cli_error_test! {
        command: "update-patient",
        test_name: test_non_numeric_id_rejected,
        args: ["--id", "john"],
    }
}
