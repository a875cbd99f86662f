//! CLI parsing tests for discharge command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "discharge",
        test_name: test_requires_id,
        required_arg: "--id",
    }

    crate::cli_defaults_test! {
        command: "discharge",
        variant: Discharge,
        required_args: ["--id", "1"],
        defaults: {
            id: 1,
            date: None,
        },
    }
}
