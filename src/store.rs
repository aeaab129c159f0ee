// src/store.rs

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    models::{comment::Comment, quiz::Quiz, record::QuizRecord},
    scoring,
    utils::time::clock_time,
};

/// In-memory record store.
///
/// * The quiz catalog is fixed at construction.
/// * Comments and answer records only grow; nothing is evicted.
/// * All mutation goes through the write lock, one append per call.
pub struct Store {
    quizzes: Vec<Quiz>,
    records: RwLock<Records>,
}

#[derive(Default)]
struct Records {
    comments: Vec<Comment>,
    answers: Vec<QuizRecord>,
}

/// Consistent copy of both collections, taken under one read lock.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Insertion order (oldest first).
    pub comments: Vec<Comment>,
    /// Insertion order (oldest first).
    pub records: Vec<QuizRecord>,
}

/// An answer that has already been checked against the catalog.
#[derive(Debug)]
pub struct NewAnswer {
    pub user_name: String,
    pub user_id: String,
    pub quiz_id: String,
    pub selected_option: String,
    pub is_correct: bool,
}

impl Store {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes,
            records: RwLock::new(Records::default()),
        }
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// Catalog in its configured order.
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub async fn add_comment(&self, user_name: String, content: String) -> Comment {
        let now = Utc::now();
        let comment = Comment {
            id: format!("comment_{}", &Uuid::new_v4().simple().to_string()[..12]),
            user_name,
            content,
            time: clock_time(now),
            likes: 0,
            timestamp: now,
        };

        self.records.write().await.comments.push(comment.clone());
        comment
    }

    /// All comments, newest first.
    pub async fn comments(&self) -> Vec<Comment> {
        let records = self.records.read().await;
        records.comments.iter().rev().cloned().collect()
    }

    /// Adds (or withdraws) one like. Returns the new count, or `None` if no
    /// comment has that id. Withdrawing never goes below zero.
    pub async fn like_comment(&self, id: &str, liked: bool) -> Option<u64> {
        let mut records = self.records.write().await;
        let comment = records.comments.iter_mut().find(|c| c.id == id)?;

        if liked {
            comment.likes += 1;
        } else {
            comment.likes = comment.likes.saturating_sub(1);
        }

        Some(comment.likes)
    }

    /// Appends an answer record and returns it together with the user's
    /// score including this answer.
    pub async fn record_answer(&self, answer: NewAnswer) -> (QuizRecord, u64) {
        let mut records = self.records.write().await;
        // Read the clock under the lock so ids and timestamps agree.
        let now = Utc::now();

        let record = QuizRecord {
            id: records.answers.len() as u64 + 1,
            user_name: answer.user_name,
            user_id: answer.user_id,
            quiz_id: answer.quiz_id,
            selected_option: answer.selected_option,
            is_correct: answer.is_correct,
            time: clock_time(now),
            timestamp: now,
        };
        records.answers.push(record.clone());

        let score = scoring::user_score(&records.answers, &record.user_name);
        (record, score)
    }

    /// All answer records, oldest first.
    pub async fn records(&self) -> Vec<QuizRecord> {
        self.records.read().await.answers.clone()
    }

    pub async fn snapshot(&self) -> Snapshot {
        let records = self.records.read().await;
        Snapshot {
            comments: records.comments.clone(),
            records: records.answers.clone(),
        }
    }
}
