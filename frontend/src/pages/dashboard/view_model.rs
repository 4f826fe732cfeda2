use crate::api::{ApiClient, ApiError};
use crate::components::notification::{use_notifications, Notifications};
use crate::pages::dashboard::{
    repository::{DashboardData, DashboardRepository},
    utils::ClockAction,
};
use crate::state::{
    profile::use_profile_cache,
    shell::{use_shell, ShellContext},
};
use crate::utils::{load_state::LoadState, time::today};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub dashboard_resource: Resource<u32, Result<DashboardData, ApiError>>,
    pub reload: RwSignal<u32>,
    pub shell: ShellContext,
    pub clock_action: Action<ClockAction, Result<ClockAction, ApiError>>,
}

/// Keeps the shift indicators in line with what the server recorded.
fn apply_dashboard_loaded(result: Option<Result<DashboardData, ApiError>>, shell: ShellContext) {
    if let Some(Ok(data)) = result {
        shell.sync_attendance(&data.records, today());
    }
}

fn apply_clock_result(
    result: Option<Result<ClockAction, ApiError>>,
    shell: ShellContext,
    notifications: Notifications,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(action)) => {
            shell.dispatch(action.event());
            notifications.success(action.success_message());
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            log::warn!("clock action failed: {}", err);
            notifications.error(err.error);
        }
        None => {}
    }
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repository = store_value(DashboardRepository::new(api, use_profile_cache()));
        let shell = use_shell();
        let notifications = use_notifications();
        let reload = create_rw_signal(0u32);

        let dashboard_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.load().await }
            },
        );

        let clock_action = create_action(move |action: &ClockAction| {
            let repo = repository.get_value();
            let action = *action;
            async move { repo.perform(action).await.map(|_| action) }
        });

        create_effect(move |_| apply_dashboard_loaded(dashboard_resource.get(), shell));
        create_effect(move |_| {
            apply_clock_result(clock_action.value().get(), shell, notifications, reload)
        });

        Self {
            dashboard_resource,
            reload,
            shell,
            clock_action,
        }
    }

    pub fn load_state(&self) -> Signal<LoadState> {
        let resource = self.dashboard_resource;
        Signal::derive(move || {
            LoadState::from_result(
                "dashboard",
                resource.loading().get(),
                resource.get().as_ref(),
            )
        })
    }

    pub fn data(&self) -> Signal<Option<DashboardData>> {
        let resource = self.dashboard_resource;
        Signal::derive(move || resource.get().and_then(Result::ok))
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
