use super::utils::{LoginFormState, SignupFormState, DASHBOARD_PATH};
use crate::api::{ApiClient, ApiError, LoginRequest, SignupRequest};
use crate::config;
use crate::state::auth;
use crate::utils::navigation::Navigator;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub form: SignupFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub signup_action: Action<SignupRequest, Result<(), ApiError>>,
}

/// Sends the user to the dashboard on success, otherwise surfaces the error.
pub(crate) fn apply_sign_in_result(
    result: Option<Result<(), ApiError>>,
    error: RwSignal<Option<ApiError>>,
    navigator: &dyn Navigator,
) {
    match result {
        Some(Ok(())) => {
            error.set(None);
            navigator.navigate(DASHBOARD_PATH);
        }
        Some(Err(err)) => {
            log::warn!("sign-in failed: {}", err);
            error.set(Some(err));
        }
        None => {}
    }
}

fn navigator() -> StoredValue<Rc<dyn Navigator>> {
    store_value(use_context::<ApiClient>().unwrap_or_default().navigator())
}

/// Link target for "Sign in with Microsoft", when configured.
pub fn oauth_authorize_url() -> Option<String> {
    config::cached().oauth_authorize_url
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let navigator = navigator();

    create_effect(move |_| {
        apply_sign_in_result(
            login_action.value().get(),
            error,
            navigator.get_value().as_ref(),
        );
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

pub fn use_signup_view_model() -> SignupViewModel {
    let form = SignupFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let signup_action = auth::use_signup_action();
    let navigator = navigator();

    create_effect(move |_| {
        apply_sign_in_result(
            signup_action.value().get(),
            error,
            navigator.get_value().as_ref(),
        );
    });

    SignupViewModel {
        form,
        error,
        signup_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::navigation::RecordingNavigator;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
        });
    }

    #[test]
    fn successful_sign_in_goes_to_dashboard() {
        with_runtime(|| {
            let error = create_rw_signal(Some(ApiError::validation("old")));
            let nav = RecordingNavigator::at("/login");
            apply_sign_in_result(Some(Ok(())), error, &nav);
            assert!(error.get().is_none());
            assert_eq!(nav.visits(), vec!["/dashboard".to_string()]);
        });
    }

    #[test]
    fn failed_sign_in_stays_put() {
        with_runtime(|| {
            let error = create_rw_signal(None);
            let nav = RecordingNavigator::at("/login");
            apply_sign_in_result(
                Some(Err(ApiError::new("HTTP_401", "Invalid credentials"))),
                error,
                &nav,
            );
            assert_eq!(error.get().map(|e| e.error).as_deref(), Some("Invalid credentials"));
            assert!(nav.visits().is_empty());
        });
    }
}
