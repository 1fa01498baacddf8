//! Global Application State
//!
//! The single owner of mutable state: the in-memory record sequence plus
//! the toast message signals. Components receive it via context instead
//! of reaching for globals, and every mutation persists the sequence
//! before the reactive re-render runs.

use leptos::*;

use crate::record::Record;
use crate::storage;

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// The ordered record sequence, loaded from storage at startup
    pub records: RwSignal<Vec<Record>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        records: create_rw_signal(storage::load_records()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Append a record and persist the full sequence
    pub fn append_record(&self, record: Record) {
        self.records.update(|records| records.push(record));
        self.records.with(|records| storage::save_records(records));
    }

    /// Drop every record and remove the persisted entry
    pub fn clear_all(&self) {
        self.records.set(Vec::new());
        storage::clear_records();
    }

    /// Number of records currently held
    pub fn record_count(&self) -> usize {
        self.records.with(|records| records.len())
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
