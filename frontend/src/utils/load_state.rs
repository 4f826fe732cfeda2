use crate::api::ApiError;

/// Page-level fetch lifecycle. Retrying moves back to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn from_result<T>(what: &str, loading: bool, value: Option<&Result<T, ApiError>>) -> Self {
        if loading {
            return LoadState::Loading;
        }
        match value {
            None => LoadState::Loading,
            Some(Ok(_)) => LoadState::Ready,
            Some(Err(err)) => LoadState::Failed(load_error_message(what, err)),
        }
    }
}

pub fn load_error_message(what: &str, err: &ApiError) -> String {
    format!("Error loading {}: {}", what, err.error)
}
