use crate::{
    api::CatalogEntry,
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::SuccessMessage},
    pages::admin_employees::{
        utils::{catalog_label, catalog_noun, CATALOGS},
        view_model::AdminEmployeesViewModel,
    },
};
use leptos::{ev, *};

#[component]
pub fn CatalogsPanel(vm: AdminEmployeesViewModel) -> impl IntoView {
    let form = vm.catalog_form;
    let messages = vm.catalog_messages;
    let pending = vm.catalog_action.pending();
    let directory = vm.directory();
    let catalog = Signal::derive(move || form.with(|state| state.catalog));
    let is_editing = Signal::derive(move || form.with(|state| state.editing_id.is_some()));
    let entries = Signal::derive(move || {
        let catalog = catalog.get();
        directory.with(|d| d.catalogs.entries(catalog).to_vec())
    });
    let confirming = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_catalog();
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-gray-900">{"Organisation"}</h3>
            <div class="flex gap-2">
                {CATALOGS
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if catalog.get() == tab {
                                        "px-3 py-1 rounded bg-blue-600 text-white text-sm"
                                    } else {
                                        "px-3 py-1 rounded border text-gray-700 text-sm"
                                    }
                                }
                                on:click=move |_| {
                                    confirming.set(None);
                                    vm.select_catalog(tab);
                                }
                            >
                                {catalog_label(tab)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <EmptyState title="No entries yet" /> }
            >
                <ul class="divide-y divide-gray-200">
                    <For
                        each=move || entries.get()
                        key=|entry| format!("{}:{}", entry.id, entry.name)
                        children=move |entry: CatalogEntry| {
                            let id = entry.id.clone();
                            let armed = {
                                let id = id.clone();
                                Signal::derive(move || confirming.get().as_deref() == Some(id.as_str()))
                            };
                            let edit_target = entry.clone();
                            view! {
                                <li class="py-2 flex items-center justify-between">
                                    <div>
                                        <p class="text-sm font-medium text-gray-900">{entry.name.clone()}</p>
                                        <p class="text-xs text-gray-500">{entry.description.clone().unwrap_or_default()}</p>
                                    </div>
                                    <div class="flex gap-3 text-sm">
                                        <button
                                            type="button"
                                            class="text-blue-600 hover:underline"
                                            on:click=move |_| vm.edit_catalog_entry(&edit_target)
                                        >
                                            {"Edit"}
                                        </button>
                                        <button
                                            type="button"
                                            class="text-red-600 hover:underline disabled:opacity-50"
                                            disabled=move || pending.get()
                                            on:click={
                                                let id = id.clone();
                                                move |_| {
                                                    if armed.get_untracked() {
                                                        confirming.set(None);
                                                        vm.delete_catalog_entry(id.clone());
                                                    } else {
                                                        confirming.set(Some(id.clone()));
                                                    }
                                                }
                                            }
                                        >
                                            {move || if armed.get() { "Confirm delete" } else { "Delete" }}
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <InlineErrorMessage error=Signal::derive(move || messages.get().error) />
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message=messages.get().success.unwrap_or_default() />
            </Show>
            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700">
                        {move || format!("{} name", catalog_noun(catalog.get()))}
                    </label>
                    <input
                        type="text"
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || form.with(|s| s.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.name = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Description"}</label>
                    <input
                        type="text"
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || form.with(|s| s.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.description = value);
                        }
                    />
                </div>
                <div class="md:col-span-2 flex gap-2">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 bg-blue-600 text-white rounded disabled:opacity-50"
                    >
                        {move || {
                            let noun = catalog_noun(catalog.get());
                            match (pending.get(), is_editing.get()) {
                                (true, _) => "Saving...".to_string(),
                                (false, true) => format!("Save {}", noun.to_lowercase()),
                                (false, false) => format!("Add {}", noun.to_lowercase()),
                            }
                        }}
                    </button>
                    <Show when=move || is_editing.get()>
                        <button
                            type="button"
                            class="px-4 py-2 border rounded text-gray-700"
                            on:click=move |_| vm.cancel_catalog_edit()
                        >
                            {"Cancel"}
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
