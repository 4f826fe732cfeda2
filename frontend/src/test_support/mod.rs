#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::EmployeeProfile;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn employee_profile() -> EmployeeProfile {
        EmployeeProfile {
            id: "e-jane".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            job_title: Some("Engineer".into()),
            department: Some("R&D".into()),
            role: Some("EMPLOYEE".into()),
            active: true,
            phone: None,
            hire_date: chrono::NaiveDate::from_ymd_opt(2021, 4, 1),
        }
    }

    pub fn admin_profile() -> EmployeeProfile {
        EmployeeProfile {
            id: "e-admin".into(),
            first_name: "Ada".into(),
            last_name: "Admin".into(),
            email: "ada@example.com".into(),
            role: Some("ADMIN".into()),
            ..employee_profile()
        }
    }

    pub fn provide_auth(
        user: Option<EmployeeProfile>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
