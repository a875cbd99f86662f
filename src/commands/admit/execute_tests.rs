//! Execute tests for admit command.

#[cfg(test)]
mod tests {
    use super::super::AdmitCmd;
    use crate::commands::Execute;
    use crate::queries::records;
    use crate::types::{AdmissionStatus, Room, RoomStatus};
    use rstest::{fixture, rstest};

    crate::shared_fixture! {
        fixture_name: populated_db,
        fixture_type: seeded,
    }

    fn cmd(room_id: i64) -> AdmitCmd {
        AdmitCmd {
            patient_id: 2,
            doctor_id: 1,
            room_id,
            date: Some("2024-03-04 18:30".to_string()),
            notes: Some("Observation".to_string()),
        }
    }

    crate::execute_test! {
        test_name: test_admit_into_free_room,
        fixture: populated_db,
        cmd: cmd(2),
        assertions: |result| {
            assert_eq!(result.admission_id, 3);
            assert_eq!(result.status, AdmissionStatus::Admitted);
            assert_eq!(result.admission_date, "2024-03-04 18:30:00");
            assert_eq!(result.discharge_date, None);
            assert_eq!(result.notes.as_deref(), Some("Observation"));
        },
    }

    #[rstest]
    fn test_admit_marks_room_occupied(populated_db: Box<dyn crate::db::DatabaseBackend>) {
        cmd(2).execute(&*populated_db).unwrap();
        let room: Room = records::fetch(&*populated_db, 2).unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
    }

    #[rstest]
    fn test_default_date_is_now(populated_db: Box<dyn crate::db::DatabaseBackend>) {
        let admission = AdmitCmd { date: None, ..cmd(2) }
            .execute(&*populated_db)
            .unwrap();
        assert!(crate::utils::parse_timestamp(&admission.admission_date).is_some());
    }

    // Room 101 holds John Doe's seeded admission.
    crate::execute_error_test! {
        test_name: test_occupied_room_rejected,
        fixture: populated_db,
        cmd: cmd(1),
        contains: "Room 101 is not available (status: Occupied)",
    }

    crate::execute_error_test! {
        test_name: test_unknown_room,
        fixture: populated_db,
        cmd: cmd(77),
        contains: "references a missing room row",
    }

    #[rstest]
    fn test_failed_admission_leaves_room_free(populated_db: Box<dyn crate::db::DatabaseBackend>) {
        let result = AdmitCmd { doctor_id: 50, ..cmd(2) }.execute(&*populated_db);
        assert!(result.is_err());
        let room: Room = records::fetch(&*populated_db, 2).unwrap();
        assert_eq!(room.status, RoomStatus::Available);
    }
}
