use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::{
    api::AttendanceRecord,
    utils::storage::{self, KeyValueStore},
};

pub const SHELL_STATE_KEY: &str = "shell_state";

/// Chrome-level view state. The drawer is transient; the attendance
/// indicators survive a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellState {
    #[serde(skip)]
    pub drawer_open: bool,
    #[serde(default)]
    pub clocked_in: bool,
    #[serde(default)]
    pub active_break: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    ToggleDrawer,
    CloseDrawer,
    ClockedIn,
    ClockedOut,
    BreakStarted,
    BreakEnded,
    SignedOut,
}

pub fn reduce(state: &ShellState, event: ShellEvent) -> ShellState {
    let mut next = state.clone();
    match event {
        ShellEvent::ToggleDrawer => next.drawer_open = !state.drawer_open,
        ShellEvent::CloseDrawer => next.drawer_open = false,
        ShellEvent::ClockedIn => next.clocked_in = true,
        ShellEvent::ClockedOut => {
            next.clocked_in = false;
            next.active_break = false;
        }
        // A break only exists inside a shift.
        ShellEvent::BreakStarted => next.active_break = state.clocked_in,
        ShellEvent::BreakEnded => next.active_break = false,
        ShellEvent::SignedOut => next = ShellState::default(),
    }
    next
}

impl ShellState {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(SHELL_STATE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("discarding unreadable shell state: {}", err);
                ShellState::default()
            }),
            Ok(None) => ShellState::default(),
            Err(err) => {
                log::warn!("failed to read shell state: {}", err);
                ShellState::default()
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        let result = serde_json::to_string(self)
            .map_err(|_| storage::StorageError::Access(SHELL_STATE_KEY.to_string()))
            .and_then(|raw| store.set(SHELL_STATE_KEY, &raw));
        if let Err(err) = result {
            log::warn!("failed to persist shell state: {}", err);
        }
    }

    /// Derives the indicators from today's attendance, keeping the drawer as is.
    pub fn from_attendance(&self, records: &[AttendanceRecord], today: NaiveDate) -> Self {
        let open = records
            .iter()
            .rev()
            .find(|r| r.date == today && r.clock_in.is_some() && !r.is_complete());
        ShellState {
            drawer_open: self.drawer_open,
            clocked_in: open.is_some(),
            active_break: open.and_then(|r| r.open_break()).is_some(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ShellContext {
    pub state: RwSignal<ShellState>,
    store: StoredValue<Rc<dyn KeyValueStore>>,
}

impl ShellContext {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let initial = ShellState::load(store.as_ref());
        Self {
            state: create_rw_signal(initial),
            store: store_value(store),
        }
    }

    pub fn dispatch(&self, event: ShellEvent) {
        let next = reduce(&self.state.get_untracked(), event);
        self.store.with_value(|store| next.save(store.as_ref()));
        self.state.set(next);
    }

    pub fn sync_attendance(&self, records: &[AttendanceRecord], today: NaiveDate) {
        let next = self.state.get_untracked().from_attendance(records, today);
        self.store.with_value(|store| next.save(store.as_ref()));
        self.state.set(next);
    }
}

pub fn provide_shell(store: Rc<dyn KeyValueStore>) -> ShellContext {
    let ctx = ShellContext::new(store);
    provide_context(ctx);
    ctx
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().unwrap_or_else(|| provide_shell(storage::default_store()))
}
