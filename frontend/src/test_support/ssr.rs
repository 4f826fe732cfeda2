use leptos::*;
use std::rc::Rc;

use crate::{api::ApiClient, state::shell::provide_shell, utils::storage::MemoryStore};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders on the host with resource loading suppressed, so pages show their
/// loading state instead of hitting the network.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Like `render_to_string`, with an `ApiClient` and an isolated shell state
/// in context.
pub fn render_with_api<F, N>(api: ApiClient, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_context(api);
        provide_shell(Rc::new(MemoryStore::default()));
        view()
    })
}
