use crate::{
    api::{ApiClient, EmployeeProfile},
    components::layout::LoadingSpinner,
    state::auth::use_auth,
    utils::navigation::{redirect_to_login, Navigator},
};
use leptos::*;
use std::rc::Rc;

fn use_navigator() -> StoredValue<Rc<dyn Navigator>> {
    store_value(use_context::<ApiClient>().unwrap_or_default().navigator())
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let navigator = use_navigator();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        navigator.with_value(|nav| redirect_to_login(nav.as_ref()));
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let navigator = use_navigator();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        navigator.with_value(|nav| {
            if !state.is_authenticated {
                redirect_to_login(nav.as_ref());
            } else if !is_admin_user(state.user.as_ref()) {
                nav.navigate("/dashboard");
            }
        });
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&EmployeeProfile>) -> bool {
    user.map(|u| u.is_admin()).unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{is_admin_user, RequireAdmin, RequireAuth};
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_profile, employee_profile};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_auth_state(state: AuthState) {
        provide_context(create_signal(state));
    }

    #[test]
    fn admin_role_check_accepts_admin_and_hr() {
        let mut hr = employee_profile();
        hr.role = Some("HR".into());
        assert!(!is_admin_user(None));
        assert!(!is_admin_user(Some(&employee_profile())));
        assert!(is_admin_user(Some(&admin_profile())));
        assert!(is_admin_user(Some(&hr)));
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(AuthState {
                user: Some(employee_profile()),
                is_authenticated: true,
                loading: false,
            });
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(AuthState {
                loading: true,
                ..Default::default()
            });
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_hides_children_for_employees() {
        let html = render_to_string(move || {
            provide_auth_state(AuthState {
                user: Some(employee_profile()),
                is_authenticated: true,
                loading: false,
            });
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_renders_children_for_admins() {
        let html = render_to_string(move || {
            provide_auth_state(AuthState {
                user: Some(admin_profile()),
                is_authenticated: true,
                loading: false,
            });
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }
}
