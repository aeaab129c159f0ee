use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_not_blank;

/// A visitor comment held in the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// "comment_" followed by 12 hex characters.
    pub id: String,
    pub user_name: String,
    pub content: String,
    /// Local wall-clock time of creation, "HH:MM".
    pub time: String,
    pub likes: u64,
    pub timestamp: DateTime<Utc>,
}

/// DTO for creating a new comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(
        length(min = 1, max = 50, message = "userName must be between 1 and 50 characters"),
        custom(function = validate_not_blank, message = "userName must not be blank")
    )]
    pub user_name: String,

    #[serde(alias = "text")]
    #[validate(
        length(min = 1, max = 1000, message = "Comment must be between 1 and 1000 characters"),
        custom(function = validate_not_blank, message = "Comment must not be blank")
    )]
    pub content: String,
}

/// DTO for liking (or un-liking) a comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeCommentRequest {
    #[validate(length(min = 1, max = 64, message = "commentId is required"))]
    pub comment_id: String,

    /// `false` withdraws a like. Omitted means like.
    #[serde(default = "default_liked")]
    pub liked: bool,
}

fn default_liked() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: u64,
}
