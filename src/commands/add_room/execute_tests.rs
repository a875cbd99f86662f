//! Execute tests for add-room command.

#[cfg(test)]
mod tests {
    use super::super::AddRoomCmd;
    use crate::output::Outputable;
    use crate::types::RoomStatus;
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: empty_schema,
        fixture_type: migrated,
    }

    crate::execute_test! {
        test_name: test_new_room_is_available,
        fixture: empty_schema,
        cmd: AddRoomCmd {
            number: "401".to_string(),
            room_type: "ICU".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.room_id, 1);
            assert_eq!(result.status, RoomStatus::Available);
            assert_eq!(result.to_table(), "Room 401 (1): ICU [Available]");
        },
    }

    crate::execute_error_test! {
        test_name: test_blank_type_rejected,
        fixture: empty_schema,
        cmd: AddRoomCmd {
            number: "401".to_string(),
            room_type: "".to_string(),
        },
        contains: "room.room_type is required",
    }

    crate::execute_empty_db_test! {
        cmd_type: AddRoomCmd,
        cmd: AddRoomCmd {
            number: "401".to_string(),
            room_type: "ICU".to_string(),
        },
    }
}
