pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod notification;
pub mod status_badge;
