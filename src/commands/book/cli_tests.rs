//! CLI parsing tests for book command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "book",
        test_name: test_requires_patient_id,
        required_arg: "--patient-id",
    }

    crate::cli_option_test! {
        command: "book",
        variant: Book,
        test_name: test_with_date,
        args: ["-p", "1", "-d", "2", "--date", "2024-03-05 11:00"],
        field: date,
        expected: "2024-03-05 11:00",
    }

    crate::cli_error_test! {
        command: "book",
        test_name: test_missing_date_rejected,
        args: ["--patient-id", "1", "--doctor-id", "2"],
    }
}
