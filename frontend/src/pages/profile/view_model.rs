use crate::api::{ApiError, EmployeeProfile};
use crate::state::profile::{use_profile_cache, ProfileCache};
use crate::utils::{load_state::LoadState, time::format_date};
use leptos::*;

/// Label/value pairs shown on the profile card; absent fields read "-".
pub fn profile_rows(profile: &EmployeeProfile) -> Vec<(&'static str, String)> {
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    vec![
        ("Email", profile.email.clone()),
        ("Job title", or_dash(&profile.job_title)),
        ("Department", or_dash(&profile.department)),
        ("Role", or_dash(&profile.role)),
        ("Phone", or_dash(&profile.phone)),
        (
            "Hire date",
            profile
                .hire_date
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Status",
            if profile.active { "Active" } else { "Inactive" }.to_string(),
        ),
    ]
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub cache: StoredValue<ProfileCache>,
    pub profile_resource: Resource<u32, Result<EmployeeProfile, ApiError>>,
    pub reload: RwSignal<u32>,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        let cache = store_value(use_profile_cache());
        let reload = create_rw_signal(0u32);
        let profile_resource = create_resource(
            move || reload.get(),
            move |_| {
                let cache = cache.get_value();
                async move { cache.get_or_fetch().await }
            },
        );
        Self {
            cache,
            profile_resource,
            reload,
        }
    }

    pub fn load_state(&self) -> Signal<LoadState> {
        let resource = self.profile_resource;
        Signal::derive(move || {
            LoadState::from_result("profile", resource.loading().get(), resource.get().as_ref())
        })
    }

    pub fn profile(&self) -> Signal<Option<EmployeeProfile>> {
        let resource = self.profile_resource;
        Signal::derive(move || resource.get().and_then(Result::ok))
    }

    /// Drops the memoised profile so the next load hits the server.
    pub fn refresh(&self) {
        self.cache.with_value(ProfileCache::invalidate);
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    use_context::<ProfileViewModel>().unwrap_or_else(|| {
        let vm = ProfileViewModel::new();
        provide_context(vm);
        vm
    })
}
