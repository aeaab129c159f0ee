// src/utils/time.rs

use chrono::{DateTime, Local, Utc};

/// Formats an instant as local wall-clock "HH:MM", the way records and
/// comments display their time.
pub fn clock_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Compact local timestamp used in export file names.
pub fn file_stamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y%m%d_%H%M%S").to_string()
}
