use crate::api::AttendanceRecord;
use crate::components::empty_state::EmptyState;
use crate::pages::dashboard::utils::latest_record;
use crate::utils::time::{format_date, format_hours, format_time};
use leptos::*;

#[component]
pub fn LatestAttendance(records: Vec<AttendanceRecord>) -> impl IntoView {
    let latest = latest_record(&records).cloned();
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-3">
            <h3 class="text-base font-semibold text-gray-900">{"Latest attendance"}</h3>
            {match latest {
                None => view! { <EmptyState title="No attendance recorded yet" /> }.into_view(),
                Some(record) => view! {
                    <dl class="grid grid-cols-2 gap-3 text-sm">
                        <dt class="text-gray-500">{"Date"}</dt>
                        <dd class="text-gray-900">{format_date(record.date)}</dd>
                        <dt class="text-gray-500">{"Clock in"}</dt>
                        <dd class="text-gray-900">{format_time(record.clock_in)}</dd>
                        <dt class="text-gray-500">{"Clock out"}</dt>
                        <dd class="text-gray-900">{format_time(record.clock_out)}</dd>
                        <dt class="text-gray-500">{"Worked"}</dt>
                        <dd class="text-gray-900">{format_hours(record.worked_hours())}</dd>
                    </dl>
                }
                .into_view(),
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn shows_most_recent_record() {
        let records: Vec<AttendanceRecord> = serde_json::from_value(json!([
            { "id": "a", "date": "2024-05-02", "clockIn": "2024-05-02T09:00:00", "clockOut": "2024-05-02T17:30:00" },
            { "id": "b", "date": "2024-05-03", "clockIn": "2024-05-03T08:15:00" }
        ]))
        .unwrap();
        let html = render_to_string(move || view! { <LatestAttendance records=records /> });
        assert!(html.contains("May 3, 2024"));
        assert!(html.contains("08:15"));
        assert!(html.contains("--:--"));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let html = render_to_string(|| view! { <LatestAttendance records=Vec::new() /> });
        assert!(html.contains("No attendance recorded yet"));
    }
}
