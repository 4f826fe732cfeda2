use crate::components::{empty_state::EmptyState, status_badge::StatusBadge};
use crate::pages::requests::{
    components::pagination::Pagination, types::UnifiedRequest, utils::RequestListState,
};
use leptos::*;

#[component]
pub fn RequestsList(
    list: RwSignal<RequestListState>,
    on_cancel: Callback<UnifiedRequest>,
    #[prop(into)] cancel_pending: Signal<bool>,
) -> impl IntoView {
    let visible = Signal::derive(move || list.with(|state| state.visible()));

    view! {
        <div class="bg-white shadow rounded-lg">
            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! {
                    <div class="p-6">
                        <EmptyState
                            title="No requests found"
                            description="Try another tab or filter, or submit a new request."
                        />
                    </div>
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Type"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Details"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Description"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || visible.get()
                                key=|request| (request.key(), request.status)
                                children=move |request: UnifiedRequest| {
                                    let cancelable = request.is_cancelable();
                                    let stored = store_value(request.clone());
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{request.kind.label()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{request.period_label()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{request.detail_label()}</td>
                                            <td class="px-6 py-4 text-sm text-gray-700">
                                                {request.description.clone().unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <StatusBadge status=request.status />
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <Show
                                                    when=move || cancelable
                                                    fallback=|| view! { <span class="text-gray-400">{"-"}</span> }
                                                >
                                                    <button
                                                        type="button"
                                                        class="text-red-600 hover:underline disabled:opacity-50"
                                                        disabled=move || cancel_pending.get()
                                                        on:click=move |_| on_cancel.call(stored.get_value())
                                                    >
                                                        {"Cancel"}
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <Pagination list=list />
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{RequestKind, RequestStatus};
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn request(id: &str, status: RequestStatus, day: u32) -> UnifiedRequest {
        UnifiedRequest {
            id: id.into(),
            kind: RequestKind::Overtime,
            status,
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            description: Some(format!("Task {}", id)),
            leave_type: None,
            end_date: None,
            hours: Some(2.0),
            amount: None,
        }
    }

    #[test]
    fn only_pending_rows_offer_cancel() {
        let html = render_to_string(|| {
            let list = create_rw_signal(RequestListState::new(vec![
                request("a", RequestStatus::Pending, 2),
                request("b", RequestStatus::Approved, 1),
            ]));
            view! { <RequestsList list=list on_cancel=Callback::new(|_| ()) cancel_pending=Signal::derive(|| false) /> }
        });
        assert!(html.contains("Task a"));
        assert!(html.contains("Approved"));
        assert_eq!(html.matches("Cancel").count(), 1);
        assert!(!html.contains("Page 1 of"));
    }

    #[test]
    fn paginates_beyond_eight_rows() {
        let html = render_to_string(|| {
            let requests = (1..=9)
                .map(|day| request(&day.to_string(), RequestStatus::Pending, day))
                .collect();
            let list = create_rw_signal(RequestListState::new(requests));
            view! { <RequestsList list=list on_cancel=Callback::new(|_| ()) cancel_pending=Signal::derive(|| false) /> }
        });
        assert!(html.contains("Page 1 of 2"));
        assert_eq!(html.matches("Task ").count(), 8);
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(|| {
            let list = create_rw_signal(RequestListState::new(Vec::new()));
            view! { <RequestsList list=list on_cancel=Callback::new(|_| ()) cancel_pending=Signal::derive(|| false) /> }
        });
        assert!(html.contains("No requests found"));
    }
}
