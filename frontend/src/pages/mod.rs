pub mod admin_employees;
pub mod attendance;
pub mod dashboard;
pub mod documents;
pub mod home;
pub mod login;
pub mod oauth_callback;
pub mod profile;
pub mod requests;
