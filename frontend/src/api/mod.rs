mod auth;
pub mod client;
mod documents;
pub mod employees;
mod self_service;
pub mod types;

pub use client::*;
pub use employees::Catalog;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
