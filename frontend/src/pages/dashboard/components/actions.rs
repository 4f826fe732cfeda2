use crate::pages::dashboard::utils::{available_actions, ClockAction};
use crate::state::shell::ShellState;
use leptos::*;

fn button_class(action: ClockAction) -> &'static str {
    match action {
        ClockAction::ClockIn => "px-4 py-2 rounded bg-green-600 text-white disabled:opacity-50",
        ClockAction::ClockOut => "px-4 py-2 rounded bg-red-600 text-white disabled:opacity-50",
        ClockAction::BreakStart | ClockAction::BreakEnd => {
            "px-4 py-2 rounded bg-amber-500 text-white disabled:opacity-50"
        }
    }
}

fn status_line(state: &ShellState) -> &'static str {
    match (state.clocked_in, state.active_break) {
        (false, _) => "You are not clocked in.",
        (true, false) => "You are on shift.",
        (true, true) => "You are on a break.",
    }
}

#[component]
pub fn ClockButtons(
    #[prop(into)] state: Signal<ShellState>,
    #[prop(into)] pending: Signal<bool>,
    on_action: Callback<ClockAction>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <p class="text-sm text-gray-700">{move || status_line(&state.get())}</p>
            <div class="flex flex-wrap gap-3">
                {move || {
                    available_actions(&state.get())
                        .into_iter()
                        .map(|action| view! {
                            <button
                                type="button"
                                class=button_class(action)
                                disabled=move || pending.get()
                                on:click=move |_| on_action.call(action)
                            >
                                {action.label()}
                            </button>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(state: ShellState) -> String {
        render_to_string(move || {
            view! { <ClockButtons state=Signal::derive(move || state.clone()) pending=Signal::derive(|| false) on_action=Callback::new(|_| ()) /> }
        })
    }

    #[test]
    fn off_shift_offers_clock_in_only() {
        let html = render(ShellState::default());
        assert!(html.contains("Clock in"));
        assert!(!html.contains("Clock out"));
        assert!(html.contains("not clocked in"));
    }

    #[test]
    fn break_offers_end_break_only() {
        let html = render(ShellState {
            drawer_open: false,
            clocked_in: true,
            active_break: true,
        });
        assert!(html.contains("End break"));
        assert!(!html.contains("Clock out"));
    }
}
