use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

use crate::{
    api::types::*,
    config,
    utils::{
        navigation::{self, Navigator},
        storage::{self, KeyValueStore},
    },
};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const CURRENT_USER_KEY: &str = "current_user";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

type SharedRefresh = Shared<LocalBoxFuture<'static, Result<AuthTokens, ApiError>>>;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    storage: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
    refresh_in_flight: Rc<RefCell<Option<SharedRefresh>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            storage: storage::default_store(),
            navigator: navigation::default_navigator(),
            refresh_in_flight: Rc::new(RefCell::new(None)),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            ..Self::new()
        }
    }

    pub fn with_storage(mut self, storage: Rc<dyn KeyValueStore>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn storage(&self) -> Rc<dyn KeyValueStore> {
        self.storage.clone()
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        self.navigator.clone()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub fn has_session(&self) -> bool {
        stored(self.storage.as_ref(), ACCESS_TOKEN_KEY).is_some()
    }

    fn bearer_token(&self) -> Option<String> {
        stored(self.storage.as_ref(), ACCESS_TOKEN_KEY)
    }

    fn refresh_token_value(&self) -> Option<String> {
        stored(self.storage.as_ref(), REFRESH_TOKEN_KEY)
    }

    pub(crate) fn store_tokens(&self, tokens: &AuthTokens) -> Result<(), ApiError> {
        persist_tokens(self.storage.as_ref(), tokens)
    }

    pub(crate) fn clear_session(&self) {
        clear_session(self.storage.as_ref());
    }

    fn expire_session(&self) {
        self.clear_session();
        navigation::redirect_to_login(self.navigator.as_ref());
    }

    /// Sends a request that does not carry credentials and never triggers a
    /// refresh (login, signup, token exchange).
    pub(crate) async fn send_public<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let request = build()?
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        execute(&self.client, request).await
    }

    /// Sends an authenticated request. On 401 the stored refresh token is
    /// exchanged once (shared between concurrent callers) and the request
    /// is rebuilt and retried once with the new access token.
    pub(crate) async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let sent_token = self.bearer_token();
        let response = self.send_authorized(&build, sent_token.clone()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        // Another caller refreshed while this request was in flight.
        if let Some(current) = self.bearer_token().filter(|t| Some(t) != sent_token.as_ref()) {
            return self.retry_or_expire(&build, current).await;
        }

        let Some(refresh_token) = self.refresh_token_value() else {
            log::warn!("received 401 without a refresh token; ending session");
            self.expire_session();
            return Err(ApiError::unauthorized(
                "Your session has expired. Please sign in again.",
            ));
        };

        let tokens = match self.refresh_shared(refresh_token).await {
            Ok(tokens) => tokens,
            Err(err) => {
                log::warn!("token refresh failed: {}", err);
                self.expire_session();
                return Err(ApiError::unauthorized(
                    "Your session has expired. Please sign in again.",
                ));
            }
        };

        self.retry_or_expire(&build, tokens.access_token).await
    }

    async fn retry_or_expire<F>(&self, build: &F, token: String) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let retried = self.send_authorized(build, Some(token)).await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            log::warn!("request still unauthorized after refresh; ending session");
            self.expire_session();
            return Err(ApiError::unauthorized(
                "Your session has expired. Please sign in again.",
            ));
        }
        Ok(retried)
    }

    async fn send_authorized<F>(&self, build: &F, token: Option<String>) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let mut builder = build()?.header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        execute(&self.client, request).await
    }

    async fn refresh_shared(&self, refresh_token: String) -> Result<AuthTokens, ApiError> {
        let base_url = self.resolved_base_url().await;
        let pending = {
            let mut slot = self.refresh_in_flight.borrow_mut();
            match slot.as_ref() {
                Some(existing) => existing.clone(),
                None => {
                    log::info!("refreshing access token");
                    let fut = request_refresh(self.client.clone(), base_url, refresh_token)
                        .boxed_local()
                        .shared();
                    *slot = Some(fut.clone());
                    fut
                }
            }
        };

        let result = pending.clone().await;
        {
            let mut slot = self.refresh_in_flight.borrow_mut();
            if slot.as_ref().map(|f| f.ptr_eq(&pending)).unwrap_or(false) {
                *slot = None;
            }
        }
        let tokens = result?;
        self.store_tokens(&tokens)?;
        Ok(tokens)
    }

    pub(crate) async fn get_json<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path).await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(&url)))
            .await?;
        map_json_response(response).await
    }

    pub(crate) async fn send_json<T, R>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(path).await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().request(method.clone(), &url).json(body)))
            .await?;
        map_json_response(response).await
    }

    /// For endpoints whose success body is ignored (cancel, delete, clock).
    pub(crate) async fn send_without_body(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let url = self.url(path).await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().request(method.clone(), &url)))
            .await?;
        map_empty_response(response).await
    }
}

fn stored(storage: &dyn KeyValueStore, key: &str) -> Option<String> {
    storage
        .get(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

pub(crate) fn persist_tokens(storage: &dyn KeyValueStore, tokens: &AuthTokens) -> Result<(), ApiError> {
    storage.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
    if let Some(refresh) = &tokens.refresh_token {
        storage.set(REFRESH_TOKEN_KEY, refresh)?;
    }
    Ok(())
}

pub(crate) fn clear_session(storage: &dyn KeyValueStore) {
    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, CURRENT_USER_KEY] {
        if let Err(err) = storage.remove(key) {
            log::warn!("failed to clear {}: {}", key, err);
        }
    }
}

/// Reads the `exp` claim of a JWT without verifying it.
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    value.get("exp").and_then(|v| v.as_i64())
}

pub fn token_expired(token: &str, now_epoch_secs: i64) -> bool {
    token_expiry(token)
        .map(|exp| exp <= now_epoch_secs)
        .unwrap_or(false)
}

async fn request_refresh(
    client: Client,
    base_url: String,
    refresh_token: String,
) -> Result<AuthTokens, ApiError> {
    let request = client
        .post(format!("{}/auth/refresh-token", base_url))
        .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
        .json(&json!({ "refreshToken": refresh_token }))
        .build()
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
    let response = execute(&client, request).await?;
    let mut tokens: AuthTokens = map_json_response(response).await?;
    if tokens.refresh_token.is_none() {
        tokens.refresh_token = Some(refresh_token);
    }
    Ok(tokens)
}

async fn execute(client: &Client, request: reqwest::Request) -> Result<Response, ApiError> {
    log::debug!("{} {}", request.method(), request.url());
    #[cfg(all(test, not(target_arch = "wasm32")))]
    if let Some(responder) = mock_hook::mock_for(request.url().as_str()) {
        // Let concurrent callers interleave the way real network I/O would.
        tokio::task::yield_now().await;
        return responder.respond(&request).map(Response::from);
    }
    client
        .execute(request)
        .await
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
}

pub(crate) async fn map_json_response<R>(response: Response) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(map_error_response(response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(map_error_response(response).await)
    }
}

pub(crate) async fn map_error_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status.as_u16(), status.canonical_reason(), &body);
    log::warn!("request failed with {}: {}", status, error);
    error
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_hook::*;
