pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{LoginPage, SignupPage};
