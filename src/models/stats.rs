// src/models/stats.rs

use serde::Serialize;

/// One leaderboard row, derived from quiz records on every read.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub rank: usize,
    pub user_name: String,
    /// The id sent with this user's first answer.
    pub user_id: String,
    pub score: u64,
    pub correct: u64,
    pub wrong: u64,
    pub total: u64,
    /// Percentage, rounded to 2 decimals.
    pub accuracy: f64,
}

/// How often one option of a quiz was chosen.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionCount {
    pub label: String,
    pub count: u64,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub quiz_id: String,
    pub correct: u64,
    pub wrong: u64,
    pub total: u64,
    pub accuracy: f64,
    pub options: Vec<OptionCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    /// Distinct user names that answered at least once.
    pub total_users: usize,
    pub total_comments: usize,
    pub total_answers: u64,
    pub total_correct: u64,
    pub overall_accuracy: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserCommentCount {
    pub user_name: String,
    pub comment_count: u64,
    pub likes: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentStats {
    pub total_comments: usize,
    pub total_likes: u64,
    pub users: Vec<UserCommentCount>,
}
