// src/models/quiz.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_not_blank;

/// Option labels are single uppercase letters ("A", "B", ...).
pub(crate) static OPTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]$").expect("option label pattern is valid")
});

/// One selectable answer of a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub label: String,
    pub text: String,
    pub is_correct: bool,
}

/// A single multiple-choice question with exactly one correct option.
/// This is the server-side view; clients only ever receive `PublicQuiz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl Quiz {
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    pub fn option(&self, label: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// DTO for sending a quiz to the client (excludes the answer key).
#[derive(Debug, Serialize)]
pub struct PublicQuiz {
    pub id: String,
    pub question: String,
    pub options: Vec<PublicOption>,
}

#[derive(Debug, Serialize)]
pub struct PublicOption {
    pub label: String,
    pub text: String,
}

impl From<&Quiz> for PublicQuiz {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            question: quiz.question.clone(),
            options: quiz
                .options
                .iter()
                .map(|o| PublicOption {
                    label: o.label.clone(),
                    text: o.text.clone(),
                })
                .collect(),
        }
    }
}

/// DTO for submitting an answer to one quiz.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[validate(
        length(min = 1, max = 50, message = "userName must be between 1 and 50 characters"),
        custom(function = validate_not_blank, message = "userName must not be blank")
    )]
    pub user_name: String,

    #[validate(
        length(min = 1, max = 100, message = "userId must be between 1 and 100 characters"),
        custom(function = validate_not_blank, message = "userId must not be blank")
    )]
    pub user_id: String,

    #[validate(length(min = 1, max = 50, message = "quizId must be between 1 and 50 characters"))]
    pub quiz_id: String,

    #[validate(regex(path = *OPTION_LABEL, message = "selectedOption must be a single letter A-Z"))]
    pub selected_option: String,
}

/// Outcome of one answer submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_answer: String,
    pub message: String,
    /// The submitting user's score after this answer.
    pub score: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quiz {
        Quiz {
            id: "q".into(),
            question: "?".into(),
            options: vec![
                QuizOption { label: "A".into(), text: "a".into(), is_correct: false },
                QuizOption { label: "B".into(), text: "b".into(), is_correct: true },
            ],
        }
    }

    #[test]
    fn public_view_hides_answer_key() {
        let json = serde_json::to_value(PublicQuiz::from(&sample())).unwrap();
        assert!(!json.to_string().contains("isCorrect"));
        assert_eq!(json["options"][1]["label"], "B");
    }

    #[test]
    fn finds_correct_option() {
        assert_eq!(sample().correct_option().unwrap().label, "B");
        assert!(sample().option("Z").is_none());
    }

    #[test]
    fn rejects_lowercase_and_multi_letter_labels() {
        let mut req = SubmitAnswerRequest {
            user_name: "u".into(),
            user_id: "id".into(),
            quiz_id: "quiz_1".into(),
            selected_option: "b".into(),
        };
        assert!(req.validate().is_err());
        req.selected_option = "AB".into();
        assert!(req.validate().is_err());
        req.selected_option = "B".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_blank_user_name() {
        let req = SubmitAnswerRequest {
            user_name: "   ".into(),
            user_id: "id".into(),
            quiz_id: "quiz_1".into(),
            selected_option: "A".into(),
        };
        assert!(req.validate().is_err());
    }
}
