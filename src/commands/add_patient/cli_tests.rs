//! CLI parsing tests for add-patient command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "add-patient",
        test_name: test_requires_first_name,
        required_arg: "--first-name",
    }

    crate::cli_defaults_test! {
        command: "add-patient",
        variant: AddPatient,
        required_args: ["--first-name", "John", "--last-name", "Doe"],
        defaults: {
            gender_id: None,
            dob: None,
            phone: None,
            email: None,
            address: None,
        },
    }

    crate::cli_option_test_with_required! {
        command: "add-patient",
        variant: AddPatient,
        required_args: ["--first-name", "John", "--last-name", "Doe"],
        test_name: test_with_dob,
        args: ["--dob", "1985-06-15"],
        field: dob,
        expected: Some("1985-06-15".to_string()),
    }

    crate::cli_option_test_with_required! {
        command: "add-patient",
        variant: AddPatient,
        required_args: ["--first-name", "John", "--last-name", "Doe"],
        test_name: test_with_gender_id,
        args: ["--gender-id", "1"],
        field: gender_id,
        expected: Some(1),
    }

    crate::cli_error_test! {
        command: "add-patient",
        test_name: test_non_numeric_gender_rejected,
        args: ["--first-name", "John", "--last-name", "Doe", "--gender-id", "male"],
    }
}
