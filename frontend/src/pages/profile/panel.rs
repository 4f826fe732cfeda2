use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::profile::view_model::{profile_rows, use_profile_view_model};
use crate::utils::load_state::LoadState;
use leptos::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let vm = use_profile_view_model();
    let load_state = vm.load_state();
    let profile = vm.profile();

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"My profile"}</h1>
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded border text-sm text-gray-700 hover:bg-gray-50"
                        on:click=move |_| vm.refresh()
                    >
                        {"Refresh"}
                    </button>
                </div>
                {move || match load_state.get() {
                    LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                    LoadState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                    LoadState::Ready => profile
                        .get()
                        .map(|profile| view! {
                            <div class="bg-white shadow rounded-lg p-6">
                                <h2 class="text-xl font-semibold text-gray-900">{profile.full_name()}</h2>
                                <dl class="mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2">
                                    {profile_rows(&profile)
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <div>
                                                <dt class="text-xs font-semibold uppercase text-gray-500">{label}</dt>
                                                <dd class="mt-1 text-sm text-gray-900">{value}</dd>
                                            </div>
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                        })
                        .into_view(),
                }}
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::profile::view_model::ProfileViewModel;
    use crate::test_support::{
        helpers::{employee_profile, provide_auth},
        ssr::render_with_api,
    };

    #[test]
    fn renders_profile_card() {
        let html = render_with_api(ApiClient::new_with_base_url("http://localhost:9/api"), || {
            provide_auth(Some(employee_profile()));
            let vm = ProfileViewModel::new();
            provide_context(vm);
            vm.profile_resource.set(Ok(employee_profile()));
            view! { <ProfilePage /> }
        });
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("Refresh"));
    }
}
