use crate::api::{ApiError, LoginRequest, SignupRequest};
use leptos::*;

pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest { email, password })
    }
}

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
        }
    }
}

impl SignupFormState {
    pub fn to_request(self) -> Result<SignupRequest, ApiError> {
        let first_name = self.first_name.get_untracked().trim().to_string();
        let last_name = self.last_name.get_untracked().trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(ApiError::validation("Please enter your first and last name."));
        }
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        if password.chars().count() < 8 {
            return Err(ApiError::validation(
                "Passwords must be at least 8 characters long.",
            ));
        }
        if password != self.confirm_password.get_untracked() {
            return Err(ApiError::validation("Passwords do not match."));
        }
        Ok(SignupRequest {
            first_name,
            last_name,
            email,
            password,
        })
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Please enter your email address."));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn validate_credentials_requires_email_and_password() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("jane", "secret").is_err());
        assert!(validate_credentials("jane@example.com", "").is_err());
        assert!(validate_credentials("jane@example.com", "secret").is_ok());
    }

    #[test]
    fn login_form_trims_email() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.email.set("  jane@example.com ".into());
            form.password.set("secret".into());
            let request = form.to_request().unwrap();
            assert_eq!(request.email, "jane@example.com");
        });
    }

    #[test]
    fn signup_form_checks_names_length_and_confirmation() {
        with_runtime(|| {
            let form = SignupFormState::default();
            form.email.set("jane@example.com".into());
            form.password.set("longenough".into());
            form.confirm_password.set("longenough".into());
            assert!(form.to_request().is_err());

            form.first_name.set("Jane".into());
            form.last_name.set("Doe".into());
            assert!(form.to_request().is_ok());

            form.confirm_password.set("different".into());
            assert_eq!(
                form.to_request().unwrap_err().error,
                "Passwords do not match."
            );

            form.password.set("short".into());
            form.confirm_password.set("short".into());
            assert!(form.to_request().is_err());
        });
    }
}
