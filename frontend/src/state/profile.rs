use leptos::*;
use std::{cell::RefCell, rc::Rc};

use crate::api::{ApiClient, ApiError, EmployeeProfile};

/// Session-wide memo of `GET /auth/user`.
#[derive(Clone)]
pub struct ProfileCache {
    api: ApiClient,
    cached: Rc<RefCell<Option<EmployeeProfile>>>,
}

impl ProfileCache {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cached: Rc::new(RefCell::new(None)),
        }
    }

    pub fn peek(&self) -> Option<EmployeeProfile> {
        self.cached.borrow().clone()
    }

    pub async fn get_or_fetch(&self) -> Result<EmployeeProfile, ApiError> {
        if let Some(profile) = self.peek() {
            return Ok(profile);
        }
        let profile = self.api.get_current_user().await?;
        *self.cached.borrow_mut() = Some(profile.clone());
        Ok(profile)
    }

    pub fn invalidate(&self) {
        self.cached.borrow_mut().take();
    }
}

pub fn use_profile_cache() -> ProfileCache {
    use_context::<ProfileCache>().unwrap_or_else(|| {
        let cache = ProfileCache::new(use_context::<ApiClient>().unwrap_or_default());
        provide_context(cache.clone());
        cache
    })
}
