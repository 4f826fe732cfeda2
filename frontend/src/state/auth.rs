use crate::{
    api::{
        token_expired, ApiClient, ApiError, EmployeeProfile, LoginRequest, SignupRequest,
        ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
    },
    state::profile::{use_profile_cache, ProfileCache},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<EmployeeProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let cache = use_profile_cache();
    spawn_local(async move {
        match check_auth_status(&api_client, &cache, chrono::Utc::now().timestamp()).await {
            Ok(user) => set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            Err(err) => {
                log::debug!("no active session: {}", err);
                set_auth_state.update(|state| {
                    state.user = None;
                    state.is_authenticated = false;
                    state.loading = false;
                })
            }
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Restores the session on startup. A stored access token that has already
/// expired is only worth a request when a refresh token can renew it.
pub(crate) async fn check_auth_status(
    api: &ApiClient,
    cache: &ProfileCache,
    now_epoch_secs: i64,
) -> Result<EmployeeProfile, ApiError> {
    let storage = api.storage();
    let access = storage.get(ACCESS_TOKEN_KEY)?;
    let Some(access) = access.filter(|t| !t.trim().is_empty()) else {
        return Err(ApiError::unauthorized("Not signed in."));
    };
    let has_refresh = storage
        .get(REFRESH_TOKEN_KEY)?
        .map(|t| !t.trim().is_empty())
        .unwrap_or(false);
    if token_expired(&access, now_epoch_secs) && !has_refresh {
        api.logout();
        return Err(ApiError::unauthorized("Session expired."));
    }
    cache.get_or_fetch().await
}

async fn finish_sign_in(
    cache: &ProfileCache,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    cache.invalidate();
    match cache.get_or_fetch().await {
        Ok(user) => {
            set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    cache: &ProfileCache,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);
    if let Err(error) = api.login(request).await {
        set_auth_state.update(|state| state.loading = false);
        return Err(error);
    }
    finish_sign_in(cache, set_auth_state).await
}

pub async fn signup_request(
    request: SignupRequest,
    api: &ApiClient,
    cache: &ProfileCache,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);
    if let Err(error) = api.signup(request).await {
        set_auth_state.update(|state| state.loading = false);
        return Err(error);
    }
    finish_sign_in(cache, set_auth_state).await
}

pub async fn oauth_request(
    code: String,
    oauth_state: Option<String>,
    api: &ApiClient,
    cache: &ProfileCache,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);
    if let Err(error) = api.complete_oauth(&code, oauth_state.as_deref()).await {
        set_auth_state.update(|state| state.loading = false);
        return Err(error);
    }
    finish_sign_in(cache, set_auth_state).await
}

pub fn logout(api: &ApiClient, cache: &ProfileCache, set_auth_state: WriteSignal<AuthState>) {
    api.logout();
    cache.invalidate();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let cache = use_profile_cache();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let cache = cache.clone();
        async move { login_request(payload, &api, &cache, set_auth).await }
    })
}

pub fn use_signup_action() -> Action<SignupRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let cache = use_profile_cache();

    create_action(move |request: &SignupRequest| {
        let payload = request.clone();
        let api = api.clone();
        let cache = cache.clone();
        async move { signup_request(payload, &api, &cache, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = store_value(use_context::<ApiClient>().unwrap_or_default());
    let cache = store_value(use_profile_cache());
    let shell = crate::state::shell::use_shell();
    Callback::new(move |_| {
        logout(&api.get_value(), &cache.get_value(), set_auth);
        shell.dispatch(crate::state::shell::ShellEvent::SignedOut);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
            assert!(!snapshot.is_admin());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::utils::storage::{KeyValueStore, MemoryStore};
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use serde_json::json;
    use std::rc::Rc;

    fn user_json() -> serde_json::Value {
        json!({
            "id": "e1",
            "firstName": "Alice",
            "lastName": "Example",
            "email": "alice@example.com",
            "role": "ADMIN"
        })
    }

    fn jwt_expiring_at(exp: i64) -> String {
        format!(
            "h.{}.s",
            URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp))
        )
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200)
                .json_body(json!({ "accessToken": "a1", "refreshToken": "r1" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/user");
            then.status(200).json_body(user_json());
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStore::default()));
        let cache = ProfileCache::new(api.clone());

        login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
            },
            &api,
            &cache,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(snapshot.is_admin());
        let sent = &server.requests_to(GET, "/api/auth/user")[0];
        assert_eq!(sent.authorization.as_deref(), Some("Bearer a1"));

        logout(&api, &cache, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(!api.has_session());
        assert!(cache.peek().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_signed_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(json!({ "message": "Invalid credentials" }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStore::default()));
        let cache = ProfileCache::new(api.clone());

        let err = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "nope".into(),
            },
            &api,
            &cache,
            set_state,
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Invalid credentials");
        assert!(!state.get().is_authenticated);
        assert!(!state.get().loading);
        assert_eq!(server.hits(GET, "/api/auth/user"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn bootstrap_skips_fetch_for_expired_token_without_refresh() {
        let server = MockServer::start();
        let store = Rc::new(MemoryStore::with_entries([(
            ACCESS_TOKEN_KEY,
            jwt_expiring_at(100).as_str(),
        )]));
        let api = ApiClient::new_with_base_url(server.url("/api")).with_storage(store.clone());
        let cache = ProfileCache::new(api.clone());

        let err = check_auth_status(&api, &cache, 200).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(server.total_requests(), 0);
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn bootstrap_fetches_user_when_refresh_is_possible() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/user");
            then.status(200).json_body(user_json());
        });
        let expired = jwt_expiring_at(100);
        let store = Rc::new(MemoryStore::with_entries([
            (ACCESS_TOKEN_KEY, expired.as_str()),
            (REFRESH_TOKEN_KEY, "r1"),
        ]));
        let api = ApiClient::new_with_base_url(server.url("/api")).with_storage(store);
        let cache = ProfileCache::new(api.clone());

        let user = check_auth_status(&api, &cache, 200).await.unwrap();
        assert_eq!(user.id, "e1");
        assert_eq!(server.hits(GET, "/api/auth/user"), 1);
    }

    #[tokio::test]
    async fn bootstrap_without_token_is_signed_out() {
        let server = MockServer::start();
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStore::default()));
        let cache = ProfileCache::new(api.clone());
        assert!(check_auth_status(&api, &cache, 0).await.is_err());
        assert_eq!(server.total_requests(), 0);
    }
}
