//! Clock helpers for stamping command entries.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use terminal_contract::EntryTimestamp;

thread_local! {
    static LAST_ENTRY_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a strictly increasing entry timestamp.
///
/// Two entries submitted within the same millisecond still receive distinct keys.
pub fn next_entry_timestamp() -> EntryTimestamp {
    let now = unix_time_ms_now();
    LAST_ENTRY_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        EntryTimestamp(next)
    })
}
