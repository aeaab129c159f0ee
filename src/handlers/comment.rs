// src/handlers/comment.rs

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::AppError,
    models::comment::{CreateCommentRequest, LikeCommentRequest, LikeResponse},
    store::Store,
    utils::{extract::ValidJson, html::visible_text},
};

/// Create a new comment.
///
/// * Content is stored as sent (trimmed); markup-only content is rejected.
/// * Returns 201 with the stored comment.
pub async fn create_comment(
    State(store): State<Arc<Store>>,
    ValidJson(payload): ValidJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = payload.content.trim().to_string();
    if visible_text(&content).trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment is empty after removing markup".to_string(),
        ));
    }

    let comment = store.add_comment(payload.user_name, content).await;
    tracing::info!(comment_id = %comment.id, user = %comment.user_name, "Comment created");

    Ok((StatusCode::CREATED, Json(comment)))
}

/// List all comments, newest first.
pub async fn list_comments(State(store): State<Arc<Store>>) -> impl IntoResponse {
    Json(store.comments().await)
}

/// Like or un-like a comment. No ownership or repeat checks.
pub async fn like_comment(
    State(store): State<Arc<Store>>,
    ValidJson(payload): ValidJson<LikeCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let likes = store
        .like_comment(&payload.comment_id, payload.liked)
        .await
        .ok_or_else(|| {
            tracing::warn!("Like for unknown comment {}", payload.comment_id);
            AppError::NotFound("Comment not found".to_string())
        })?;

    Ok(Json(LikeResponse {
        success: true,
        likes,
    }))
}
