use crate::api::{ApiError, CreateOvertimeRequest};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::requests::utils::{MessageState, OvertimeFormState};
use leptos::*;

#[component]
pub fn OvertimeRequestForm(
    state: OvertimeFormState,
    message: RwSignal<MessageState>,
    action: Action<CreateOvertimeRequest, Result<(), ApiError>>,
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
    let hours_signal = state.hours_signal();
    let reason_signal = state.reason_signal();
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-gray-900">{"Overtime request"}</h3>
                <p class="text-sm text-gray-600">{"Between 0.5 and 12 hours per day."}</p>
            </div>
            <InlineErrorMessage error=Signal::derive(move || message.get().error) />
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message=message.get().success.unwrap_or_default() />
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Date"}</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || date_signal.get()
                            on:input=move |ev| date_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Hours"}</label>
                        <input
                            type="number"
                            min="0.5"
                            max="12"
                            step="0.5"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || hours_signal.get()
                            on:input=move |ev| hours_signal.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Reason (optional)"}</label>
                    <textarea
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason_signal.get()
                        on:input=move |ev| reason_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit overtime request" }}
                </button>
            </form>
        </div>
    }
}
