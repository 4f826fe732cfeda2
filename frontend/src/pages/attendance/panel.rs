use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::attendance::{
    components::{history::HistorySection, summary::SummarySection},
    layout::AttendanceFrame,
    view_model::use_attendance_view_model,
};
use crate::utils::load_state::LoadState;
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let load_state = vm.load_state();
    let history = vm.history();

    view! {
        <AttendanceFrame>
            {move || match load_state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(message) => view! {
                    <div>
                        <ErrorMessage message=message />
                        <button
                            type="button"
                            class="px-4 py-2 rounded bg-blue-600 text-white"
                            on:click=move |_| vm.retry()
                        >
                            {"Retry"}
                        </button>
                    </div>
                }
                .into_view(),
                LoadState::Ready => view! {
                    <SummarySection history=history />
                    <HistorySection history=history />
                }
                .into_view(),
            }}
        </AttendanceFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError, AttendanceRecord};
    use crate::pages::attendance::view_model::AttendanceViewModel;
    use crate::test_support::{
        helpers::{employee_profile, provide_auth},
        ssr::render_with_api,
    };
    use serde_json::json;

    fn render_with(result: Result<Vec<AttendanceRecord>, ApiError>) -> String {
        render_with_api(ApiClient::new_with_base_url("http://localhost:9/api"), move || {
            provide_auth(Some(employee_profile()));
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm.history_resource.set(result);
            view! { <AttendancePage /> }
        })
    }

    #[test]
    fn renders_completed_shifts() {
        let records = serde_json::from_value(json!([
            { "id": "a", "date": "2024-05-01", "clockIn": "2024-05-01T09:00:00", "clockOut": "2024-05-01T17:00:00" }
        ]))
        .unwrap();
        let html = render_with(Ok(records));
        assert!(html.contains("May 1, 2024"));
        assert!(html.contains("8.0 h"));
    }

    #[test]
    fn renders_error_with_retry() {
        let html = render_with(Err(ApiError::request_failed("Network down")));
        assert!(html.contains("Error loading attendance: Network down"));
        assert!(html.contains("Retry"));
    }
}
