//! CLI parsing tests for rooms command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "rooms",
        variant: Rooms,
        required_args: [],
        defaults: {
            room_type: None,
            available: false,
        },
    }

    crate::cli_option_test! {
        command: "rooms",
        variant: Rooms,
        test_name: test_available_flag,
        args: ["--available"],
        field: available,
        expected: true,
    }
}
