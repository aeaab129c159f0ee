// src/scoring.rs

//! Aggregates derived from the record store.
//!
//! Everything here is a pure function of the records passed in; nothing is
//! cached between calls.

use std::collections::{HashMap, HashSet};

use crate::models::{
    comment::Comment,
    quiz::Quiz,
    record::QuizRecord,
    stats::{CommentStats, OptionCount, OverviewStats, QuizStats, UserCommentCount, UserScore},
};

/// Points awarded for each correct answer. Wrong answers cost nothing.
pub const POINTS_PER_CORRECT: u64 = 10;

/// `part / whole` as a percentage rounded to 2 decimals, 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 10_000.0).round() / 100.0
}

/// Current score of one user (exact, case-sensitive name match).
pub fn user_score(records: &[QuizRecord], user_name: &str) -> u64 {
    let correct = records
        .iter()
        .filter(|r| r.user_name == user_name && r.is_correct)
        .count() as u64;
    correct * POINTS_PER_CORRECT
}

struct Tally<'a> {
    user_name: &'a str,
    user_id: &'a str,
    correct: u64,
    wrong: u64,
    first_seq: u64,
    last_correct_seq: Option<u64>,
}

impl Tally<'_> {
    fn score(&self) -> u64 {
        self.correct * POINTS_PER_CORRECT
    }

    /// Sequence id at which the user reached their current score.
    fn reached_at(&self) -> u64 {
        self.last_correct_seq.unwrap_or(self.first_seq)
    }
}

/// Ranks users by score.
///
/// Ties go to whoever reached the score first, then to the name in
/// ascending order. Ranks are 1-based positions.
pub fn leaderboard(records: &[QuizRecord]) -> Vec<UserScore> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<Tally> = Vec::new();

    for record in records {
        let slot = *index.entry(record.user_name.as_str()).or_insert_with(|| {
            tallies.push(Tally {
                user_name: &record.user_name,
                user_id: &record.user_id,
                correct: 0,
                wrong: 0,
                first_seq: record.id,
                last_correct_seq: None,
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[slot];
        if record.is_correct {
            tally.correct += 1;
            tally.last_correct_seq = Some(record.id);
        } else {
            tally.wrong += 1;
        }
    }

    tallies.sort_by(|a, b| {
        b.score()
            .cmp(&a.score())
            .then(a.reached_at().cmp(&b.reached_at()))
            .then(a.user_name.cmp(b.user_name))
    });

    tallies
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let total = t.correct + t.wrong;
            UserScore {
                rank: i + 1,
                user_name: t.user_name.to_string(),
                user_id: t.user_id.to_string(),
                score: t.score(),
                correct: t.correct,
                wrong: t.wrong,
                total,
                accuracy: percentage(t.correct, total),
            }
        })
        .collect()
}

/// Selection counts for every option of `quiz`, in catalog order.
pub fn quiz_stats(quiz: &Quiz, records: &[QuizRecord]) -> QuizStats {
    let mut options: Vec<OptionCount> = quiz
        .options
        .iter()
        .map(|o| OptionCount {
            label: o.label.clone(),
            count: 0,
            is_correct: o.is_correct,
        })
        .collect();

    let mut correct = 0;
    let mut wrong = 0;

    for record in records.iter().filter(|r| r.quiz_id == quiz.id) {
        if record.is_correct {
            correct += 1;
        } else {
            wrong += 1;
        }
        if let Some(slot) = options.iter_mut().find(|o| o.label == record.selected_option) {
            slot.count += 1;
        }
    }

    let total = correct + wrong;
    QuizStats {
        quiz_id: quiz.id.clone(),
        correct,
        wrong,
        total,
        accuracy: percentage(correct, total),
        options,
    }
}

pub fn overview(records: &[QuizRecord], comments: &[Comment]) -> OverviewStats {
    let users: HashSet<&str> = records.iter().map(|r| r.user_name.as_str()).collect();
    let total_answers = records.len() as u64;
    let total_correct = records.iter().filter(|r| r.is_correct).count() as u64;

    OverviewStats {
        total_users: users.len(),
        total_comments: comments.len(),
        total_answers,
        total_correct,
        overall_accuracy: percentage(total_correct, total_answers),
    }
}

/// Per-user comment counts, busiest commenter first.
pub fn comment_stats(comments: &[Comment]) -> CommentStats {
    let mut per_user: HashMap<&str, (u64, u64)> = HashMap::new();
    for comment in comments {
        let entry = per_user.entry(comment.user_name.as_str()).or_default();
        entry.0 += 1;
        entry.1 += comment.likes;
    }

    let mut users: Vec<UserCommentCount> = per_user
        .into_iter()
        .map(|(name, (count, likes))| UserCommentCount {
            user_name: name.to_string(),
            comment_count: count,
            likes,
        })
        .collect();
    users.sort_by(|a, b| {
        b.comment_count
            .cmp(&a.comment_count)
            .then_with(|| a.user_name.cmp(&b.user_name))
    });

    CommentStats {
        total_comments: comments.len(),
        total_likes: comments.iter().map(|c| c.likes).sum(),
        users,
    }
}
