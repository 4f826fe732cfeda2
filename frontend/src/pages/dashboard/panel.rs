use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::dashboard::{
    components::{Clock, ClockButtons, GreetingCard, LatestAttendance},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use crate::utils::load_state::LoadState;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let load_state = vm.load_state();
    let data = vm.data();
    let shell_state = vm.shell.state;
    let on_action = Callback::new(move |action| vm.clock_action.dispatch(action));

    view! {
        <DashboardFrame>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    {move || match (load_state.get(), data.get()) {
                        (LoadState::Failed(message), _) => view! {
                            <div>
                                <ErrorMessage message=message />
                                <button
                                    type="button"
                                    class="px-4 py-2 rounded bg-blue-600 text-white"
                                    on:click=move |_| vm.reload.update(|v| *v = v.wrapping_add(1))
                                >
                                    {"Retry"}
                                </button>
                            </div>
                        }
                        .into_view(),
                        (_, Some(data)) => view! {
                            <GreetingCard profile=data.profile />
                            <LatestAttendance records=data.records />
                        }
                        .into_view(),
                        _ => view! { <LoadingSpinner /> }.into_view(),
                    }}
                </div>
                <div class="space-y-6">
                    <Clock />
                    <ClockButtons
                        state=shell_state
                        pending=vm.clock_action.pending()
                        on_action=on_action
                    />
                </div>
            </div>
        </DashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError};
    use crate::pages::dashboard::{repository::DashboardData, view_model::DashboardViewModel};
    use crate::test_support::{
        helpers::{employee_profile, provide_auth},
        ssr::render_with_api,
    };

    fn api() -> ApiClient {
        ApiClient::new_with_base_url("http://localhost:9/api")
    }

    #[test]
    fn renders_greeting_and_clock_controls() {
        let html = render_with_api(api(), || {
            provide_auth(Some(employee_profile()));
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm.dashboard_resource.set(Ok(DashboardData {
                profile: employee_profile(),
                records: Vec::new(),
            }));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Clock in"));
        assert!(html.contains("No attendance recorded yet"));
    }

    #[test]
    fn renders_load_error() {
        let html = render_with_api(api(), || {
            provide_auth(Some(employee_profile()));
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm.dashboard_resource
                .set(Err(ApiError::request_failed("Network down")));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Error loading dashboard: Network down"));
    }
}
