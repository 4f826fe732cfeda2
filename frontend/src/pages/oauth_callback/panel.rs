use crate::components::{error::InlineErrorMessage, layout::LoadingSpinner};
use crate::pages::oauth_callback::view_model::use_oauth_callback_view_model;
use leptos::*;

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let vm = use_oauth_callback_view_model();
    let error = vm.error;

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full space-y-4 text-center">
                <Show
                    when=move || error.get().is_some()
                    fallback=|| view! {
                        <div>
                            <LoadingSpinner />
                            <p class="text-sm text-gray-600">{"Completing sign-in..."}</p>
                        </div>
                    }
                >
                    <InlineErrorMessage error=Signal::derive(move || error.get()) />
                    <a href="/login" class="text-blue-600 hover:underline text-sm">{"Back to sign in"}</a>
                </Show>
            </div>
        </div>
    }
}
