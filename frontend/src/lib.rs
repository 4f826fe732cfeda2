use leptos::spawn_local;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

/// Resolves the runtime config, then mounts the app so the first render
/// already sees the API base URL and OAuth settings.
pub fn run() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("starting workforce frontend");
    spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}
