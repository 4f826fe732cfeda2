use crate::api::RequestStatus;
use crate::pages::requests::utils::{RequestListState, StatusFilter};
use leptos::*;

#[component]
pub fn RequestsFilter(list: RwSignal<RequestListState>) -> impl IntoView {
    let status_value = move || list.with(|state| state.filter.status.value());
    let search_value = move || list.with(|state| state.filter.search.clone());

    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <div class="flex items-center gap-2">
                <label class="text-sm text-gray-700" for="request-status">{"Status"}</label>
                <select
                    id="request-status"
                    class="border rounded px-2 py-1 text-sm"
                    prop:value=status_value
                    on:change=move |ev| {
                        let status = StatusFilter::from_value(&event_target_value(&ev));
                        list.update(|state| state.set_status(status));
                    }
                >
                    <option value="all">{"All statuses"}</option>
                    {RequestStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="flex items-center gap-2">
                <input
                    type="search"
                    placeholder="Search description or leave type"
                    class="border rounded px-2 py-1 text-sm w-64"
                    prop:value=search_value
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        list.update(|state| state.set_search(search));
                    }
                />
                <button
                    type="button"
                    class="text-sm text-gray-700 underline"
                    on:click=move |_| {
                        list.update(|state| {
                            state.set_status(StatusFilter::All);
                            state.set_search("");
                        })
                    }
                >
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}
