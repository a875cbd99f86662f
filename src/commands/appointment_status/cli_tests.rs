//! CLI parsing tests for appointment-status command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::types::AppointmentStatus;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "appointment-status",
        test_name: test_requires_id,
        required_arg: "--id",
    }

    crate::cli_option_test! {
        command: "appointment-status",
        variant: AppointmentStatus,
        test_name: test_completed,
        args: ["--id", "1", "--status", "completed"],
        field: status,
        expected: AppointmentStatus::Completed,
    }

    crate::cli_error_test! {
        command: "appointment-status",
        test_name: test_unknown_status_rejected,
        args: ["--id", "1", "--status", "postponed"],
    }
}
