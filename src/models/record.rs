// src/models/record.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One submitted answer. Records are only ever appended.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    /// Monotonic sequence number assigned by the store, starting at 1.
    pub id: u64,
    pub user_name: String,
    pub user_id: String,
    pub quiz_id: String,
    pub selected_option: String,
    pub is_correct: bool,
    /// Local wall-clock time, "HH:MM".
    pub time: String,
    pub timestamp: DateTime<Utc>,
}
