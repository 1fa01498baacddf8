//! Record persistence
//!
//! The durable half of the record store: the whole record sequence is
//! serialized as one JSON array under a fixed `window.localStorage` key,
//! rewritten in full on every mutation and read once at startup.

use web_sys::console;

use crate::record::Record;

/// localStorage key holding the serialized record sequence
pub const STORAGE_KEY: &str = "vitalog_records";

/// Parse a persisted JSON blob into records
pub fn records_from_json(raw: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Serialize records into the persisted JSON form
pub fn records_to_json(records: &[Record]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

fn local_storage() -> Option<web_sys::Storage> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            return Some(storage);
        }
    }
    None
}

/// Load the persisted record sequence
///
/// Absent key or unavailable storage yields an empty sequence. A
/// malformed blob is logged and ignored; the next append overwrites it.
pub fn load_records() -> Vec<Record> {
    if let Some(storage) = local_storage() {
        if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
            match records_from_json(&raw) {
                Ok(records) => return records,
                Err(e) => {
                    console::error_1(
                        &format!("Ignoring malformed record data in localStorage: {}", e).into(),
                    );
                }
            }
        }
    }
    Vec::new()
}

/// Persist the full record sequence
///
/// Failures degrade to in-memory state for the session, logged but never
/// fatal.
pub fn save_records(records: &[Record]) {
    match records_to_json(records) {
        Ok(json) => {
            if let Some(storage) = local_storage() {
                if storage.set_item(STORAGE_KEY, &json).is_err() {
                    console::warn_1(&"Failed to persist records to localStorage".into());
                }
            }
        }
        Err(e) => {
            console::error_1(&format!("Failed to serialize records: {}", e).into());
        }
    }
}

/// Remove the persisted entry
pub fn clear_records() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
