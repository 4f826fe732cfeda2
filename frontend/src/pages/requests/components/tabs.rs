use crate::pages::requests::utils::{RequestListState, TypeTab};
use leptos::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 text-sm font-medium border-b-2 border-blue-600 text-blue-700"
    } else {
        "px-3 py-2 text-sm font-medium border-b-2 border-transparent text-gray-600 hover:text-gray-900"
    }
}

#[component]
pub fn RequestTypeTabs(list: RwSignal<RequestListState>) -> impl IntoView {
    view! {
        <nav class="flex gap-2 border-b border-gray-200" role="tablist">
            {TypeTab::TABS
                .into_iter()
                .map(|tab| {
                    let active = move || list.with(|state| state.filter.tab == tab);
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || active().to_string()
                            class=move || tab_class(active())
                            on:click=move |_| list.update(|state| state.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
