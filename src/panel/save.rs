//! localStorage mirror of the call history.
//!
//! The store holds one key with the JSON array from `history::encode`. Every
//! history mutation rewrites the whole value; clearing removes the key. A
//! write failure (quota, disabled storage) is logged and otherwise ignored —
//! the in-memory panel keeps working, only persistence is lost.

#[cfg(target_arch = "wasm32")]
use crate::panel::history::{self, CallRecord};

/// localStorage key. Matches the value the panel has always persisted under.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "callHistory";

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the persisted history, once at startup. Absent key, unavailable
/// storage, or malformed content all yield an empty history.
#[cfg(target_arch = "wasm32")]
pub fn load_history() -> Vec<CallRecord> {
    let Some(storage) = get_storage() else {
        return Vec::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => history::decode(&raw),
        _ => Vec::new(),
    }
}

/// Rewrite the full persisted array.
#[cfg(target_arch = "wasm32")]
pub fn store_history(records: &[CallRecord]) {
    let json = match history::encode(records) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(&format!("call history: serialize failed: {e}").into());
            return;
        }
    };
    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(&format!("call history: localStorage write failed: {e:?}").into());
        }
    }
}

/// Drop the persisted key entirely.
#[cfg(target_arch = "wasm32")]
pub fn remove_history() {
    if let Some(storage) = get_storage() {
        if let Err(e) = storage.remove_item(STORAGE_KEY) {
            web_sys::console::warn_1(&format!("call history: localStorage remove failed: {e:?}").into());
        }
    }
}
