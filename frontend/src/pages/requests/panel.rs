use crate::api::RequestKind;
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::requests::{
    components::{
        filter::RequestsFilter, leave_form::LeaveRequestForm, list::RequestsList,
        overtime_form::OvertimeRequestForm, reimbursement_form::ReimbursementRequestForm,
        tabs::RequestTypeTabs,
    },
    layout::RequestsLayout,
    types::UnifiedRequest,
    view_model::use_requests_view_model,
};
use crate::utils::load_state::LoadState;
use leptos::*;

fn form_tab_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded bg-blue-600 text-white text-sm"
    } else {
        "px-3 py-1 rounded bg-gray-100 text-gray-700 text-sm"
    }
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    let vm = use_requests_view_model();
    let load_state = vm.load_state();
    let on_cancel = Callback::new(move |request: UnifiedRequest| {
        vm.cancel(request.kind, request.id);
    });
    let cancel_pending = vm.cancel_action.pending();

    view! {
        <RequestsLayout>
            <section class="space-y-4">
                <div class="flex gap-2">
                    {RequestKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    type="button"
                                    class=move || form_tab_class(vm.active_form.get() == kind)
                                    on:click=move |_| vm.active_form.set(kind)
                                >
                                    {format!("New {}", kind.label().to_lowercase())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || match vm.active_form.get() {
                    RequestKind::Leave => view! {
                        <LeaveRequestForm
                            state=vm.leave_state
                            message=vm.leave_message
                            action=vm.leave_action
                        />
                    }
                    .into_view(),
                    RequestKind::Overtime => view! {
                        <OvertimeRequestForm
                            state=vm.overtime_state
                            message=vm.overtime_message
                            action=vm.overtime_action
                        />
                    }
                    .into_view(),
                    RequestKind::Reimbursement => view! {
                        <ReimbursementRequestForm
                            state=vm.reimbursement_state
                            message=vm.reimbursement_message
                            action=vm.reimbursement_action
                        />
                    }
                    .into_view(),
                }}
            </section>
            <section class="space-y-4">
                <RequestTypeTabs list=vm.list />
                <RequestsFilter list=vm.list />
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
                        <RequestsList list=vm.list on_cancel=on_cancel cancel_pending=cancel_pending />
                    }
                    .into_view(),
                }}
            </section>
        </RequestsLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError};
    use crate::pages::requests::view_model::RequestsViewModel;
    use crate::test_support::{helpers::provide_auth, helpers::employee_profile, ssr::render_with_api};

    fn api() -> ApiClient {
        ApiClient::new_with_base_url("http://localhost:9/api")
    }

    #[test]
    fn renders_loading_state_and_forms() {
        let html = render_with_api(api(), || {
            provide_auth(Some(employee_profile()));
            view! { <RequestsPage /> }
        });
        assert!(html.contains("Requests"));
        assert!(html.contains("Submit leave request"));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn renders_error_with_retry() {
        let html = render_with_api(api(), || {
            provide_auth(Some(employee_profile()));
            let vm = RequestsViewModel::new();
            provide_context(vm);
            vm.requests_resource
                .set(Err(ApiError::request_failed("Network down")));
            view! { <RequestsPage /> }
        });
        assert!(html.contains("Error loading requests: Network down"));
        assert!(html.contains("Retry"));
    }
}
