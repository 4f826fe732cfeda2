use crate::api::AttendanceRecord;
use crate::pages::attendance::utils::total_hours;
use crate::utils::time::format_hours;
use leptos::*;

#[component]
pub fn SummarySection(#[prop(into)] history: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4">
            <div class="bg-white shadow rounded-lg p-4">
                <p class="text-xs font-semibold uppercase text-gray-500">{"Shifts"}</p>
                <p class="mt-2 text-2xl font-bold text-gray-900">{move || history.get().len()}</p>
            </div>
            <div class="bg-white shadow rounded-lg p-4">
                <p class="text-xs font-semibold uppercase text-gray-500">{"Hours worked"}</p>
                <p class="mt-2 text-2xl font-bold text-gray-900">
                    {move || format_hours(Some(total_hours(&history.get())))}
                </p>
            </div>
        </div>
    }
}
