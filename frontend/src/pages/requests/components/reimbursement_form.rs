use crate::api::{ApiError, CreateReimbursementRequest};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::requests::utils::{MessageState, ReimbursementFormState};
use leptos::*;

#[component]
pub fn ReimbursementRequestForm(
    state: ReimbursementFormState,
    message: RwSignal<MessageState>,
    action: Action<CreateReimbursementRequest, Result<(), ApiError>>,
) -> impl IntoView {
    let pending = action.pending();
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

    let date_signal = state.date_signal();
    let amount_signal = state.amount_signal();
    let category_signal = state.category_signal();
    let description_signal = state.description_signal();
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-gray-900">{"Reimbursement request"}</h3>
                <p class="text-sm text-gray-600">{"Claim back an expense you paid for the company."}</p>
            </div>
            <InlineErrorMessage error=Signal::derive(move || message.get().error) />
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message=message.get().success.unwrap_or_default() />
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Expense date"}</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || date_signal.get()
                            on:input=move |ev| date_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Amount"}</label>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || amount_signal.get()
                            on:input=move |ev| amount_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Category (optional)"}</label>
                        <input
                            type="text"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || category_signal.get()
                            on:input=move |ev| category_signal.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Description"}</label>
                    <textarea
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || description_signal.get()
                        on:input=move |ev| description_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit reimbursement" }}
                </button>
            </form>
        </div>
    }
}
