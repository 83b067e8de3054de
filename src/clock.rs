//! Clock Utilities
//!
//! Millisecond wall-clock ids and created-at formatting. Ids are bumped past
//! the previously issued value so two calls in the same millisecond still get
//! distinct, increasing ids.

use std::cell::Cell;

use chrono::DateTime;

thread_local! {
    static LAST_ID: Cell<i64> = const { Cell::new(0) };
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Issue a fresh id: current time in ms, strictly greater than any id issued
/// before on this thread
pub fn next_id() -> i64 {
    LAST_ID.with(|last| {
        let id = now_ms().max(last.get() + 1);
        last.set(id);
        id
    })
}

/// Format an epoch-ms timestamp as "YYYY-MM-DD HH:MM" (UTC)
pub fn format_timestamp(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::from("?"),
    }
}
