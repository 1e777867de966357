//! Call history records and their JSON codec.
//!
//! The persisted format is a bare JSON array of records, newest first — the
//! same shape the storage key has always held, so old data loads unchanged.
//! Absent or malformed text decodes to an empty history rather than an error.

use serde::{Deserialize, Serialize};

/// Maximum records kept; inserting an 11th evicts the oldest.
pub const HISTORY_CAP: usize = 10;

/// One logged call: service, number, wall-clock strings, and a unique id
/// (creation timestamp in epoch milliseconds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub service: String,
    pub number: String,
    pub time: String,
    pub date: String,
    pub id: u64,
}

/// A wall-clock reading captured when a call is placed. Built from `js_sys`
/// in the entry point; tests construct fixed values directly.
#[derive(Clone, Debug)]
pub struct CallMoment {
    pub epoch_ms: u64,
    pub time: String,
    pub date: String,
}

impl CallMoment {
    /// Read the current wall clock from the JS `Date` API.
    pub fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self {
            epoch_ms: date.get_time() as u64,
            time: String::from(date.to_locale_time_string("en-US")),
            date: String::from(
                date.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED),
            ),
        }
    }
}

/// Prepend a record and trim to the cap. Relative order of survivors is
/// preserved.
pub fn push_record(history: &mut Vec<CallRecord>, record: CallRecord) {
    history.insert(0, record);
    history.truncate(HISTORY_CAP);
}

/// Serialize the history for the persistent store.
pub fn encode(history: &[CallRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(history)
}

/// Parse persisted text. Anything that doesn't parse as a record array is
/// treated as no history.
pub fn decode(raw: &str) -> Vec<CallRecord> {
    serde_json::from_str(raw).unwrap_or_default()
}
