//! Time helpers.
//!
//! The whole workspace represents instants as Unix timestamps in
//! milliseconds (UTC). The REST API speaks RFC 3339 strings; conversion
//! in both directions lives here.

use chrono::{DateTime, Utc};

/// Get the current Unix timestamp in milliseconds (UTC).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse an RFC 3339 string (e.g. `"2025-09-01T10:45:00Z"`) into Unix
/// milliseconds. Returns `None` for malformed input.
pub fn rfc3339_to_millis(s: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// Format Unix milliseconds as an RFC 3339 string (UTC, second precision).
pub fn millis_to_rfc3339(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        None => String::from("invalid-timestamp"),
    }
}
