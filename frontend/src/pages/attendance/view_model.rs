use crate::api::{ApiClient, ApiError, AttendanceRecord};
use crate::pages::attendance::{repository, utils::complete_history};
use crate::utils::load_state::LoadState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub history_resource: Resource<u32, Result<Vec<AttendanceRecord>, ApiError>>,
    pub reload: RwSignal<u32>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = store_value(use_context::<ApiClient>().unwrap_or_default());
        let reload = create_rw_signal(0u32);
        let history_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api.get_value();
                async move { repository::fetch_history(&api).await }
            },
        );
        Self {
            history_resource,
            reload,
        }
    }

    pub fn load_state(&self) -> Signal<LoadState> {
        let resource = self.history_resource;
        Signal::derive(move || {
            LoadState::from_result("attendance", resource.loading().get(), resource.get().as_ref())
        })
    }

    pub fn history(&self) -> Signal<Vec<AttendanceRecord>> {
        let resource = self.history_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|records| complete_history(&records))
                .unwrap_or_default()
        })
    }

    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for AttendanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    use_context::<AttendanceViewModel>().unwrap_or_else(|| {
        let vm = AttendanceViewModel::new();
        provide_context(vm);
        vm
    })
}
