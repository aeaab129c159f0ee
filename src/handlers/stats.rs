// src/handlers/stats.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{models::record::QuizRecord, scoring, store::Store};

/// Participant, answer and comment totals.
pub async fn overview(State(store): State<Arc<Store>>) -> impl IntoResponse {
    let snapshot = store.snapshot().await;
    Json(scoring::overview(&snapshot.records, &snapshot.comments))
}

/// Leaderboard, recomputed from all records on each call.
pub async fn user_leaderboard(State(store): State<Arc<Store>>) -> impl IntoResponse {
    let records = store.records().await;
    Json(scoring::leaderboard(&records))
}

pub async fn comment_stats(State(store): State<Arc<Store>>) -> impl IntoResponse {
    let comments = store.comments().await;
    Json(scoring::comment_stats(&comments))
}

/// Every answer record, newest first.
pub async fn quiz_records(State(store): State<Arc<Store>>) -> impl IntoResponse {
    Json(newest_first(store.records().await))
}

/// Orders records newest first by their store sequence id, which never
/// goes backwards even when the wall clock does.
pub(crate) fn newest_first(mut records: Vec<QuizRecord>) -> Vec<QuizRecord> {
    records.sort_by(|a, b| b.id.cmp(&a.id));
    records
}
