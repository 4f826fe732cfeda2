use crate::api::{ApiClient, ApiError, AttendanceRecord, EmployeeProfile};
use crate::pages::dashboard::utils::ClockAction;
use crate::state::profile::ProfileCache;
use futures::future::try_join;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub profile: EmployeeProfile,
    pub records: Vec<AttendanceRecord>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    api: ApiClient,
    profiles: ProfileCache,
}

impl DashboardRepository {
    pub fn new(api: ApiClient, profiles: ProfileCache) -> Self {
        Self { api, profiles }
    }

    pub async fn load(&self) -> Result<DashboardData, ApiError> {
        let (profile, records) =
            try_join(self.profiles.get_or_fetch(), self.api.get_attendance_records()).await?;
        Ok(DashboardData { profile, records })
    }

    pub async fn perform(&self, action: ClockAction) -> Result<AttendanceRecord, ApiError> {
        match action {
            ClockAction::ClockIn => self.api.clock_in().await,
            ClockAction::ClockOut => self.api.clock_out().await,
            ClockAction::BreakStart => self.api.start_break().await,
            ClockAction::BreakEnd => self.api.end_break().await,
        }
    }
}
