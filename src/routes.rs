// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{comment, export, pages, quiz, stats},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (comments, quizzes, stats, export).
/// * Serves the admin and participant pages plus the health probe.
/// * Applies global middleware (Trace, CORS open to any origin).
/// * Injects global state (record store, config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let comment_routes = Router::new()
        .route("/", get(comment::list_comments).post(comment::create_comment))
        .route("/like", post(comment::like_comment));

    let quiz_routes = Router::new()
        .route("/", get(quiz::list_quizzes))
        .route("/answer", post(quiz::submit_answer))
        .route("/{quiz_id}", get(quiz::get_quiz))
        .route("/{quiz_id}/stats", get(quiz::quiz_stats));

    let stats_routes = Router::new()
        .route("/overview", get(stats::overview))
        .route("/users", get(stats::user_leaderboard))
        .route("/comments", get(stats::comment_stats))
        .route("/quiz-records", get(stats::quiz_records));

    let export_routes = Router::new().route("/quiz-records", get(export::export_quiz_records));

    Router::new()
        .route("/", get(pages::index_page))
        .route("/admin", get(pages::admin_page))
        .route("/health", get(pages::health_check))
        .nest("/api/comments", comment_routes)
        .nest("/api/quizzes", quiz_routes)
        .nest("/api/stats", stats_routes)
        .nest("/api/export", export_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
