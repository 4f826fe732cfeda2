use crate::api::{ApiError, CreateLeaveRequest};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::requests::utils::{LeaveFormState, MessageState, LEAVE_TYPES};
use leptos::*;

#[component]
pub fn LeaveRequestForm(
    state: LeaveFormState,
    message: RwSignal<MessageState>,
    action: Action<CreateLeaveRequest, Result<(), ApiError>>,
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

    let leave_type = state.leave_type_signal();
    let start_signal = state.start_signal();
    let end_signal = state.end_signal();
    let reason_signal = state.reason_signal();
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-gray-900">{"Leave request"}</h3>
                <p class="text-sm text-gray-600">{"Choose a leave type and the days you will be away."}</p>
            </div>
            <InlineErrorMessage error=Signal::derive(move || message.get().error) />
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message=message.get().success.unwrap_or_default() />
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Leave type"}</label>
                    <select
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        {LEAVE_TYPES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Start date"}</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || start_signal.get()
                            on:input=move |ev| start_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"End date"}</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || end_signal.get()
                            on:input=move |ev| end_signal.set(event_target_value(&ev))
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
                    {move || if pending.get() { "Submitting..." } else { "Submit leave request" }}
                </button>
            </form>
        </div>
    }
}
