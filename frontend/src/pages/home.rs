use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let signed_in = move || auth.get().is_authenticated;

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl lg:text-6xl">
                        "Workforce"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-gray-600 sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Attendance, requests and documents in one place."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                        <Show
                            when=signed_in
                            fallback=|| view! {
                                <a href="/login" class="flex items-center justify-center px-8 py-3 rounded-md text-white bg-blue-600 hover:bg-blue-700">
                                    "Sign in"
                                </a>
                                <a href="/signup" class="flex items-center justify-center px-8 py-3 rounded-md border text-gray-700 bg-white hover:bg-gray-50">
                                    "Create account"
                                </a>
                            }
                        >
                            <a href="/dashboard" class="flex items-center justify-center px-8 py-3 rounded-md text-white bg-blue-600 hover:bg-blue-700">
                                "Go to dashboard"
                            </a>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{employee_profile, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn guests_see_sign_in_links() {
        let html = render_to_string(|| {
            provide_auth(None);
            view! { <HomePage /> }
        });
        assert!(html.contains("Sign in"));
        assert!(html.contains("Create account"));
    }

    #[test]
    fn signed_in_users_see_dashboard_link() {
        let html = render_to_string(|| {
            provide_auth(Some(employee_profile()));
            view! { <HomePage /> }
        });
        assert!(html.contains("Go to dashboard"));
        assert!(!html.contains("Create account"));
    }
}
