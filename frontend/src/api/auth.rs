use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::json;

use super::{
    client::{map_json_response, ApiClient, CURRENT_USER_KEY, REFRESH_TOKEN_KEY},
    types::{ApiError, AuthTokens, EmployeeProfile, LoginRequest, SignupRequest},
};
use crate::utils::storage::KeyValueStore;

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<AuthTokens, ApiError> {
        let url = self.url("/auth/login").await;
        let response = self
            .send_public(|| Ok(self.http_client().post(&url).json(&request)))
            .await?;
        let tokens: AuthTokens = map_json_response(response).await?;
        self.store_tokens(&tokens)?;
        log::info!("signed in as {}", request.email);
        Ok(tokens)
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<AuthTokens, ApiError> {
        let url = self.url("/auth/signup").await;
        let response = self
            .send_public(|| Ok(self.http_client().post(&url).json(&request)))
            .await?;
        let tokens: AuthTokens = map_json_response(response).await?;
        self.store_tokens(&tokens)?;
        Ok(tokens)
    }

    /// Explicit refresh with the stored refresh token; the automatic path
    /// lives in `send_with_refresh`.
    pub async fn refresh_token(&self) -> Result<AuthTokens, ApiError> {
        let refresh_token = self
            .storage()
            .get(REFRESH_TOKEN_KEY)?
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ApiError::unauthorized("No refresh token stored."))?;
        let url = self.url("/auth/refresh-token").await;
        let response = self
            .send_public(|| {
                Ok(self
                    .http_client()
                    .post(&url)
                    .json(&json!({ "refreshToken": refresh_token })))
            })
            .await?;
        let mut tokens: AuthTokens = map_json_response(response).await?;
        if tokens.refresh_token.is_none() {
            tokens.refresh_token = Some(refresh_token);
        }
        self.store_tokens(&tokens)?;
        Ok(tokens)
    }

    /// Exchanges the authorization code returned by the identity provider.
    pub async fn complete_oauth(
        &self,
        code: &str,
        state: Option<&str>,
    ) -> Result<AuthTokens, ApiError> {
        if code.trim().is_empty() {
            return Err(ApiError::validation("Missing authorization code."));
        }
        let mut url = format!(
            "{}?code={}",
            self.url("/auth/oauth2/callback").await,
            utf8_percent_encode(code, NON_ALPHANUMERIC)
        );
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            url.push_str(&format!(
                "&state={}",
                utf8_percent_encode(state, NON_ALPHANUMERIC)
            ));
        }
        let response = self.send_public(|| Ok(self.http_client().get(&url))).await?;
        let tokens: AuthTokens = map_json_response(response).await?;
        self.store_tokens(&tokens)?;
        Ok(tokens)
    }

    pub async fn get_current_user(&self) -> Result<EmployeeProfile, ApiError> {
        let user: EmployeeProfile = self.get_json("/auth/user").await?;
        // The profile is still usable when it cannot be cached.
        if let Err(err) = remember_user(self.storage().as_ref(), &user) {
            log::warn!("failed to cache current user: {}", err);
        }
        Ok(user)
    }

    /// Last user returned by `get_current_user`, if any.
    pub fn cached_user(&self) -> Option<EmployeeProfile> {
        self.storage()
            .get(CURRENT_USER_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Client-side logout: the backend keeps no session to revoke.
    pub fn logout(&self) {
        self.clear_session();
        log::info!("signed out");
    }
}

fn remember_user(storage: &dyn KeyValueStore, user: &EmployeeProfile) -> Result<(), ApiError> {
    let serialized =
        serde_json::to_string(user).map_err(|e| ApiError::unknown(e.to_string()))?;
    storage.set(CURRENT_USER_KEY, &serialized)?;
    Ok(())
}
