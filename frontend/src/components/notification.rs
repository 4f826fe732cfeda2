use leptos::*;

pub const TOAST_DURATION_MS: u32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// One toast at a time; a newer toast replaces the current one.
#[derive(Clone, Copy)]
pub struct Notifications {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(1),
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some(Toast { id, kind, message }));
        self.schedule_dismiss(id);
    }

    /// Clears the toast only if it is still the one with `id`.
    pub fn dismiss(&self, id: u64) {
        if self.current.get_untracked().map(|t| t.id) == Some(id) {
            self.current.set(None);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            this.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(|| {
        let notifications = Notifications::new();
        provide_context(notifications);
        notifications
    })
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-600 text-white",
        ToastKind::Error => "bg-red-600 text-white",
    }
}

#[component]
pub fn NotificationToast() -> impl IntoView {
    let notifications = use_notifications();
    view! {
        {move || {
            notifications.current().map(|toast| {
                let id = toast.id;
                view! {
                    <div
                        class=format!(
                            "fixed bottom-4 right-4 z-50 rounded-md shadow-lg px-4 py-3 text-sm flex items-center gap-3 {}",
                            toast_class(toast.kind),
                        )
                        role="status"
                    >
                        <span>{toast.message}</span>
                        <button class="opacity-75 hover:opacity-100" on:click=move |_| notifications.dismiss(id)>
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
