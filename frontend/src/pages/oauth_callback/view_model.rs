use crate::api::{ApiClient, ApiError};
use crate::pages::login::view_model::apply_sign_in_result;
use crate::state::{auth, profile::use_profile_cache};
use crate::utils::navigation::query_param;
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: String,
    pub state: Option<String>,
}

/// Reads `code`/`state`/`error` from the callback query string.
pub fn parse_callback(query: &str) -> Result<CallbackParams, ApiError> {
    if let Some(error) = query_param(query, "error") {
        let description = query_param(query, "error_description").unwrap_or(error);
        return Err(ApiError::unauthorized(format!(
            "Microsoft sign-in failed: {}",
            description
        )));
    }
    let code = query_param(query, "code")
        .filter(|code| !code.trim().is_empty())
        .ok_or_else(|| ApiError::validation("The sign-in response is missing an authorization code."))?;
    Ok(CallbackParams {
        code,
        state: query_param(query, "state").filter(|state| !state.is_empty()),
    })
}

#[derive(Clone, Copy)]
pub struct OAuthCallbackViewModel {
    pub error: RwSignal<Option<ApiError>>,
}

pub fn use_oauth_callback_view_model() -> OAuthCallbackViewModel {
    let (_auth, set_auth) = auth::use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let navigator = store_value(api.navigator());
    let cache = use_profile_cache();
    let error = create_rw_signal(None::<ApiError>);

    let exchange_action = create_action(move |params: &CallbackParams| {
        let params = params.clone();
        let api = api.clone();
        let cache = cache.clone();
        async move { auth::oauth_request(params.code, params.state, &api, &cache, set_auth).await }
    });

    let query = navigator.get_value().current_query().unwrap_or_default();
    match parse_callback(&query) {
        Ok(params) => exchange_action.dispatch(params),
        Err(err) => {
            log::warn!("oauth callback rejected: {}", err);
            error.set(Some(err));
        }
    }

    create_effect(move |_| {
        apply_sign_in_result(
            exchange_action.value().get(),
            error,
            navigator.get_value().as_ref(),
        );
    });

    OAuthCallbackViewModel { error }
}
