use crate::api::AttendanceRecord;
use crate::components::empty_state::EmptyState;
use crate::pages::attendance::utils::break_minutes;
use crate::utils::time::{format_date, format_hours, format_time};
use leptos::*;

#[component]
pub fn HistorySection(#[prop(into)] history: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <div class="bg-white shadow overflow-hidden sm:rounded-md">
            <Show
                when=move || !history.get().is_empty()
                fallback=|| view! {
                    <div class="p-6">
                        <EmptyState
                            title="No completed shifts"
                            description="Records appear here once you clock out."
                        />
                    </div>
                }
            >
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Date"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"In"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Out"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Breaks"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Worked"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || history.get()
                            key=|record| record.id.clone()
                            children=move |record: AttendanceRecord| {
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 text-sm text-gray-900">{format_date(record.date)}</td>
                                        <td class="px-6 py-4 text-sm text-gray-900">{format_time(record.clock_in)}</td>
                                        <td class="px-6 py-4 text-sm text-gray-900">{format_time(record.clock_out)}</td>
                                        <td class="px-6 py-4 text-sm text-gray-900">{format!("{} min", break_minutes(&record))}</td>
                                        <td class="px-6 py-4 text-sm text-gray-900">{format_hours(record.worked_hours())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
