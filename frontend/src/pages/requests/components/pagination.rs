use crate::pages::requests::utils::RequestListState;
use leptos::*;

#[component]
pub fn Pagination(list: RwSignal<RequestListState>) -> impl IntoView {
    let page = move || list.with(|state| state.current_page());
    let total = move || list.with(|state| state.total_pages().max(1));

    view! {
        <Show when=move || list.with(|state| state.total_pages() > 1)>
            <div class="flex items-center justify-between px-6 py-3 border-t text-sm text-gray-700">
                <button
                    type="button"
                    class="px-3 py-1 rounded border disabled:opacity-50"
                    disabled=move || page() <= 1
                    on:click=move |_| list.update(|state| {
                        let previous = state.current_page().saturating_sub(1);
                        state.go_to(previous);
                    })
                >
                    {"Previous"}
                </button>
                <span>{move || format!("Page {} of {}", page(), total())}</span>
                <button
                    type="button"
                    class="px-3 py-1 rounded border disabled:opacity-50"
                    disabled=move || page() >= total()
                    on:click=move |_| list.update(|state| {
                        let next = state.current_page() + 1;
                        state.go_to(next);
                    })
                >
                    {"Next"}
                </button>
            </div>
        </Show>
    }
}
