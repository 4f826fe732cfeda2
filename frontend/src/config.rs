use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "OAUTH_AUTHORIZE_URL")]
    pub oauth_authorize_url: Option<String>,
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

impl RuntimeConfig {
    /// Fills gaps in `self` from `other`; values already present win.
    fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            oauth_authorize_url: self.oauth_authorize_url.or(other.oauth_authorize_url),
        }
    }

    fn with_defaults(self) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: Some(normalize_base_url(
                self.api_base_url
                    .as_deref()
                    .unwrap_or(DEFAULT_API_BASE_URL),
            )),
            oauth_authorize_url: self.oauth_authorize_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_window_object(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
async fn resolve() -> RuntimeConfig {
    // window.__WORKFORCE_ENV (env.js) > window.__WORKFORCE_CONFIG > ./config.json
    let mut cfg = RuntimeConfig::default();
    for name in ["__WORKFORCE_ENV", "__WORKFORCE_CONFIG"] {
        if let Some(found) = read_window_object(name) {
            cfg = cfg.merge(found);
        }
    }
    if cfg.api_base_url.is_none() || cfg.oauth_authorize_url.is_none() {
        if let Some(found) = fetch_runtime_config().await {
            cfg = cfg.merge(found);
        }
    }
    cfg
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve() -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: std::env::var("WORKFORCE_API_BASE_URL").ok(),
        oauth_authorize_url: std::env::var("WORKFORCE_OAUTH_AUTHORIZE_URL").ok(),
    }
}

pub async fn runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let cfg = resolve().await.with_defaults();
    let _ = RUNTIME_CONFIG.set(cfg.clone());
    RUNTIME_CONFIG.get().cloned().unwrap_or(cfg)
}

pub async fn await_api_base_url() -> String {
    runtime_config()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Returns the cached config without resolving it. Components call this
/// after `init` has run.
pub fn cached() -> RuntimeConfig {
    RUNTIME_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| RuntimeConfig::default().with_defaults())
}

pub async fn init() {
    let cfg = runtime_config().await;
    log::info!(
        "runtime config resolved: api_base_url={}",
        cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_existing_values() {
        let env = RuntimeConfig {
            api_base_url: Some("https://env.example/api".into()),
            oauth_authorize_url: None,
        };
        let file = RuntimeConfig {
            api_base_url: Some("https://file.example/api".into()),
            oauth_authorize_url: Some("https://login.example/authorize".into()),
        };
        let merged = env.merge(file);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://env.example/api"));
        assert_eq!(
            merged.oauth_authorize_url.as_deref(),
            Some("https://login.example/authorize")
        );
    }

    #[test]
    fn defaults_normalize_trailing_slash_and_blank_values() {
        let cfg = RuntimeConfig {
            api_base_url: Some("https://hr.example/api/".into()),
            oauth_authorize_url: Some("  ".into()),
        }
        .with_defaults();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://hr.example/api"));
        assert_eq!(cfg.oauth_authorize_url, None);

        let cfg = RuntimeConfig::default().with_defaults();
        assert_eq!(cfg.api_base_url.as_deref(), Some(DEFAULT_API_BASE_URL));
    }

    #[test]
    fn config_json_accepts_upper_case_keys() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL":"https://x.example/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://x.example/api"));
    }
}
