//! Output formatting tests for workload command.

#[cfg(test)]
mod tests {
    use super::super::execute::WorkloadResult;
    use crate::queries::reports::DoctorWorkload;
    use rstest::{fixture, rstest};

    #[fixture]
    fn empty_result() -> WorkloadResult {
        WorkloadResult { doctors: vec![] }
    }

    #[fixture]
    fn single_result() -> WorkloadResult {
        WorkloadResult {
            doctors: vec![DoctorWorkload {
                doctor_id: 1,
                doctor_name: "Emily Brown".to_string(),
                department: Some("Cardiology".to_string()),
                total_appointments: 3,
                completed_appointments: 2,
                unique_patients: 2,
                completion_rate: 66.7,
                current_admissions: 1,
            }],
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: WorkloadResult,
        expected: "No doctors registered.",
    }

    crate::output_table_test! {
        test_name: test_to_table_single,
        fixture: single_result,
        fixture_type: WorkloadResult,
        expected: "\
ID  Doctor       Department  Appts  Done  Rate   Patients  Admitted
1   Emily Brown  Cardiology  3      2     66.7%  2         1",
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: single_result,
        fixture_type: WorkloadResult,
        assertions: {
            "doctors": serde_json::json!([{
                "doctor_id": 1,
                "doctor_name": "Emily Brown",
                "department": "Cardiology",
                "total_appointments": 3,
                "completed_appointments": 2,
                "unique_patients": 2,
                "completion_rate": 66.7,
                "current_admissions": 1,
            }]),
        },
    }
}
