use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::documents::{
    components::{list::DocumentsTable, upload_form::UploadForm},
    view_model::{use_documents_view_model, ReplaceTarget},
};
use crate::utils::load_state::LoadState;
use leptos::*;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let vm = use_documents_view_model();
    let load_state = vm.load_state();
    let documents = vm.documents();
    let on_download = Callback::new(move |id: String| vm.download_action.dispatch(id));
    let on_replace = Callback::new(move |target: ReplaceTarget| vm.replace_action.dispatch(target));

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Documents"}</h1>
                <UploadForm
                    state=vm.upload_state
                    message=vm.upload_message
                    action=vm.upload_action
                />
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
                        <DocumentsTable
                            documents=documents
                            on_download=on_download
                            on_replace=on_replace
                        />
                    }
                    .into_view(),
                }}
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError};
    use crate::pages::documents::view_model::DocumentsViewModel;
    use crate::test_support::{
        helpers::{employee_profile, provide_auth},
        ssr::render_with_api,
    };

    #[test]
    fn shows_upload_form_while_loading() {
        let html = render_with_api(ApiClient::new_with_base_url("http://localhost:9/api"), || {
            provide_auth(Some(employee_profile()));
            view! { <DocumentsPage /> }
        });
        assert!(html.contains("Upload a document"));
        assert!(html.contains("Identification"));
    }

    #[test]
    fn shows_load_error() {
        let html = render_with_api(ApiClient::new_with_base_url("http://localhost:9/api"), || {
            provide_auth(Some(employee_profile()));
            let vm = DocumentsViewModel::new();
            provide_context(vm);
            vm.documents_resource
                .set(Err(ApiError::request_failed("Service unavailable")));
            view! { <DocumentsPage /> }
        });
        assert!(html.contains("Error loading documents: Service unavailable"));
        assert!(html.contains("Retry"));
    }
}
