use crate::{
    api::CatalogEntry,
    components::{error::InlineErrorMessage, layout::SuccessMessage},
    pages::admin_employees::{utils::EmployeeFormState, view_model::AdminEmployeesViewModel},
};
use leptos::{ev, *};
use wasm_bindgen::JsCast;

#[component]
fn CatalogSelect(
    label: &'static str,
    #[prop(into)] entries: Signal<Vec<CatalogEntry>>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <select
                class="mt-1 w-full border rounded px-2 py-1"
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="">{"Not set"}</option>
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| view! { <option value=entry.id>{entry.name}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
pub fn EmployeeForm(vm: AdminEmployeesViewModel) -> impl IntoView {
    let form = vm.form;
    let messages = vm.form_messages;
    let pending = vm.save_action.pending();
    let directory = vm.directory();
    let is_editing = Signal::derive(move || form.with(EmployeeFormState::is_editing));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let text_input = move |label: &'static str,
                           kind: &'static str,
                           get: fn(&EmployeeFormState) -> String,
                           set: fn(&mut EmployeeFormState, String)| {
        view! {
            <div>
                <label class="block text-sm font-medium text-gray-700">{label}</label>
                <input
                    type=kind
                    class="mt-1 w-full border rounded px-2 py-1"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| set(state, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-gray-900">
                {move || if is_editing.get() { "Edit employee" } else { "New employee" }}
            </h2>
            <InlineErrorMessage error=Signal::derive(move || messages.get().error) />
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message=messages.get().success.unwrap_or_default() />
            </Show>
            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
                {text_input("First name", "text", |s| s.first_name.clone(), |s, v| s.first_name = v)}
                {text_input("Last name", "text", |s| s.last_name.clone(), |s, v| s.last_name = v)}
                {text_input("Email", "email", |s| s.email.clone(), |s, v| s.email = v)}
                <CatalogSelect
                    label="Department"
                    entries=Signal::derive(move || directory.get().catalogs.departments)
                    value=Signal::derive(move || form.with(|s| s.department_id.clone()))
                    on_change=Callback::new(move |v| form.update(|s| s.department_id = v))
                />
                <CatalogSelect
                    label="Job title"
                    entries=Signal::derive(move || directory.get().catalogs.job_titles)
                    value=Signal::derive(move || form.with(|s| s.job_title_id.clone()))
                    on_change=Callback::new(move |v| form.update(|s| s.job_title_id = v))
                />
                <CatalogSelect
                    label="Role"
                    entries=Signal::derive(move || directory.get().catalogs.roles)
                    value=Signal::derive(move || form.with(|s| s.role_id.clone()))
                    on_change=Callback::new(move |v| form.update(|s| s.role_id = v))
                />
                <div class="flex items-center space-x-2 md:col-span-2">
                    <input
                        type="checkbox"
                        class="h-4 w-4 text-blue-600 border-gray-300 rounded"
                        prop:checked=move || form.with(|s| s.active)
                        on:change=move |ev| {
                            if let Some(target) =
                                ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                form.update(|state| state.active = target.checked());
                            }
                        }
                    />
                    <span class="text-sm text-gray-700">{"Active"}</span>
                </div>
                <div class="md:col-span-2 flex gap-2">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 bg-blue-600 text-white rounded disabled:opacity-50"
                    >
                        {move || match (pending.get(), is_editing.get()) {
                            (true, _) => "Saving...",
                            (false, true) => "Save changes",
                            (false, false) => "Create employee",
                        }}
                    </button>
                    <Show when=move || is_editing.get()>
                        <button
                            type="button"
                            class="px-4 py-2 border rounded text-gray-700"
                            on:click=move |_| vm.cancel_edit()
                        >
                            {"Cancel"}
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
