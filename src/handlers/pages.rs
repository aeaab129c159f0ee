// src/handlers/pages.rs

use axum::{Json, extract::State, response::Html};
use serde_json::json;

use crate::config::Config;

const ADMIN_PAGE: &str = include_str!("../../static/admin.html");
const INDEX_PAGE: &str = include_str!("../../static/index.html");

/// Admin dashboard. The polling interval comes from configuration.
pub async fn admin_page(State(config): State<Config>) -> Html<String> {
    Html(ADMIN_PAGE.replace(
        "{{REFRESH_SECS}}",
        &config.admin_refresh_secs.to_string(),
    ))
}

/// Participant page: answer quizzes, post and like comments.
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Liveness probe.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
