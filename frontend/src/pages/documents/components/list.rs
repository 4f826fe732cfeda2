use crate::api::Document;
use crate::components::{empty_state::EmptyState, notification::use_notifications};
use crate::pages::documents::{
    utils::{document_type_label, read_selected_file},
    view_model::ReplaceTarget,
};
use crate::utils::time::format_date;
use leptos::*;

#[component]
fn ReplaceButton(id: String, on_replace: Callback<ReplaceTarget>) -> impl IntoView {
    let notifications = use_notifications();
    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let id = id.clone();
        spawn_local(async move {
            match read_selected_file(input).await {
                Ok(file) => on_replace.call(ReplaceTarget { id, file }),
                Err(err) => notifications.error(err.error),
            }
        });
    };
    view! {
        <label class="cursor-pointer text-sm text-blue-600 hover:underline">
            {"Replace"}
            <input type="file" class="hidden" on:change=on_change />
        </label>
    }
}

#[component]
pub fn DocumentsTable(
    #[prop(into)] documents: Signal<Vec<Document>>,
    on_download: Callback<String>,
    on_replace: Callback<ReplaceTarget>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !documents.get().is_empty()
            fallback=|| view! {
                <EmptyState
                    title="No documents yet"
                    description="Upload contracts, certificates and other files here."
                />
            }
        >
            <ul class="divide-y divide-gray-200 bg-white shadow sm:rounded-md">
                <For
                    each=move || documents.get()
                    key=|doc| doc.id.clone()
                    children=move |doc: Document| {
                        let download_id = doc.id.clone();
                        view! {
                            <li class="px-6 py-4 flex items-center justify-between">
                                <div>
                                    <p class="text-sm font-medium text-gray-900">{doc.name.clone()}</p>
                                    <p class="text-xs text-gray-500">
                                        {document_type_label(&doc.document_type)}
                                        {doc.file_name.clone().map(|name| format!(" · {}", name))}
                                        {doc.uploaded_at.map(|at| format!(" · {}", format_date(at.date())))}
                                    </p>
                                </div>
                                <div class="flex items-center gap-4">
                                    <button
                                        type="button"
                                        class="text-sm text-blue-600 hover:underline"
                                        on:click=move |_| on_download.call(download_id.clone())
                                    >
                                        {"Download"}
                                    </button>
                                    <ReplaceButton id=doc.id.clone() on_replace=on_replace />
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
