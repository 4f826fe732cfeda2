use crate::api::{ApiClient, ApiError, AttendanceRecord};

pub async fn fetch_history(api: &ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.get_attendance_records().await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::utils::storage::MemoryStore;
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn fetches_employee_attendance() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/attendance");
            then.status(200).json_body(json!([
                {
                    "id": "a1",
                    "date": "2024-05-02",
                    "clockIn": "2024-05-02T09:00:00",
                    "clockOut": "2024-05-02T17:00:00",
                    "breaks": [{ "id": "b1", "breakStart": "2024-05-02T12:00:00", "breakEnd": "2024-05-02T12:30:00" }]
                }
            ]));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStore::default()));

        let records = fetch_history(&api).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].worked_hours(), Some(7.5));
    }
}
