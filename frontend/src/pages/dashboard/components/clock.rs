use chrono::{Local, NaiveDateTime};
use leptos::*;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[component]
pub fn Clock() -> impl IntoView {
    let (time, set_time) = create_signal(now());

    // Dropping the stored interval cancels it when the component unmounts.
    #[cfg(target_arch = "wasm32")]
    let _interval = store_value(gloo_timers::callback::Interval::new(1000, move || {
        set_time.set(now());
    }));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    let date_str = move || time.get().format("%A, %B %-d, %Y").to_string();
    let time_str = move || time.get().format("%H:%M:%S").to_string();

    view! {
        <div class="bg-gradient-to-br from-blue-600 to-blue-700 text-white shadow-lg rounded-lg overflow-hidden">
            <div class="flex flex-col items-center justify-center py-4 space-y-2">
                <div class="text-lg font-medium opacity-90">{date_str}</div>
                <div class="text-4xl font-bold tracking-wider font-mono">{time_str}</div>
            </div>
        </div>
    }
}
