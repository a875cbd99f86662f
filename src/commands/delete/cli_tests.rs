//! CLI parsing tests for delete command.

#[cfg(test)]
mod tests {
    use super::super::EntityKind;
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "delete",
        test_name: test_requires_entity,
        required_arg: "--entity",
    }

    crate::cli_option_test! {
        command: "delete",
        variant: Delete,
        test_name: test_room_entity,
        args: ["-e", "room", "--id", "5"],
        field: entity,
        expected: EntityKind::Room,
    }

    crate::cli_error_test! {
        command: "delete",
        test_name: test_views_not_deletable,
        args: ["--entity", "patient_details", "--id", "1"],
    }
}
