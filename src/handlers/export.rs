// src/handlers/export.rs

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};
use chrono::Utc;

use crate::{
    handlers::stats::newest_first, models::record::QuizRecord, store::Store,
    utils::time::file_stamp,
};

const HEADER_ROW: [&str; 7] = ["No", "User", "Quiz", "Selected", "Result", "Time", "Timestamp"];

/// Downloads all quiz records as a CSV attachment, newest first.
/// The body starts with a UTF-8 BOM so spreadsheet tools detect the encoding.
pub async fn export_quiz_records(State(store): State<Arc<Store>>) -> impl IntoResponse {
    let records = newest_first(store.records().await);
    let filename = format!("quiz_records_{}.csv", file_stamp(Utc::now()));

    tracing::info!("Exporting {} quiz records", records.len());

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        render_csv(&records),
    )
}

fn render_csv(records: &[QuizRecord]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(&HEADER_ROW.join(","));
    out.push_str("\r\n");

    for (i, r) in records.iter().enumerate() {
        let result = if r.is_correct { "correct" } else { "wrong" };
        let row = [
            (i + 1).to_string(),
            escape_field(&r.user_name),
            escape_field(&r.quiz_id),
            escape_field(&r.selected_option),
            result.to_string(),
            r.time.clone(),
            r.timestamp.to_rfc3339(),
        ];
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    out
}

/// Quotes a field when needed and neutralizes spreadsheet formulas.
fn escape_field(value: &str) -> String {
    let value = if value.starts_with(['=', '+', '-', '@']) {
        format!("'{}", value)
    } else {
        value.to_string()
    };

    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value
    }
}
