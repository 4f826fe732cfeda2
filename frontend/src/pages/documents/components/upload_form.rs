use crate::api::{ApiError, FileUpload, NewDocument};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::documents::utils::{read_selected_file, UploadFormState, DOCUMENT_TYPES};
use crate::pages::requests::utils::MessageState;
use leptos::*;

#[component]
pub fn UploadForm(
    state: UploadFormState,
    message: RwSignal<MessageState>,
    action: Action<(NewDocument, FileUpload), Result<(), ApiError>>,
) -> impl IntoView {
    let pending = action.pending();
    let name = state.name_signal();
    let document_type = state.type_signal();
    let file = state.file_signal();

    let on_file = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        spawn_local(async move {
            match read_selected_file(input).await {
                Ok(selected) => file.set(Some(selected)),
                Err(err) => {
                    file.set(None);
                    message.update(|msg| msg.set_error(err));
                }
            }
        });
    };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match state.to_payload() {
            Ok(payload) => {
                message.update(|msg| msg.clear());
                action.dispatch(payload);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-gray-900">{"Upload a document"}</h3>
            <InlineErrorMessage error=Signal::derive(move || message.get().error) />
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message=message.get().success.unwrap_or_default() />
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Name"}</label>
                        <input
                            type="text"
                            placeholder="Defaults to the file name"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Type"}</label>
                        <select
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || document_type.get()
                            on:change=move |ev| document_type.set(event_target_value(&ev))
                        >
                            {DOCUMENT_TYPES
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div>
                    <input type="file" class="block text-sm" on:change=on_file />
                    <p class="mt-1 text-xs text-gray-500">
                        {move || file.get().map(|f| format!("{} ({} bytes)", f.file_name, f.bytes.len()))}
                    </p>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
        </div>
    }
}
