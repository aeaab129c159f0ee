// src/catalog.rs

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::quiz::{OPTION_LABEL, Quiz, QuizOption};

/// Reasons a quiz catalog is refused at startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read quiz catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse quiz catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid quiz catalog: {0}")]
    Invalid(String),
}

/// Reads a JSON array of quizzes from `path` and validates it.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Quiz>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let quizzes: Vec<Quiz> = serde_json::from_str(&raw)?;
    validate_catalog(&quizzes)?;
    Ok(quizzes)
}

/// Same bound `SubmitAnswerRequest` puts on `quizId`.
const MAX_QUIZ_ID_CHARS: usize = 50;

/// Checks that quiz ids are unique and non-blank, and that each quiz has a
/// question, answerable option labels (unique, one letter A-Z) and exactly
/// one correct option.
pub fn validate_catalog(quizzes: &[Quiz]) -> Result<(), CatalogError> {
    if quizzes.is_empty() {
        return Err(CatalogError::Invalid("catalog is empty".to_string()));
    }

    let mut ids = HashSet::new();
    for quiz in quizzes {
        if quiz.id.trim().is_empty() || quiz.id.chars().count() > MAX_QUIZ_ID_CHARS {
            return Err(CatalogError::Invalid(format!(
                "quiz id '{}' must be 1 to {} characters",
                quiz.id, MAX_QUIZ_ID_CHARS
            )));
        }
        if quiz.question.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "quiz '{}' has a blank question",
                quiz.id
            )));
        }
        if !ids.insert(quiz.id.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate quiz id '{}'",
                quiz.id
            )));
        }

        let mut labels = HashSet::new();
        for option in &quiz.options {
            if !OPTION_LABEL.is_match(&option.label) {
                return Err(CatalogError::Invalid(format!(
                    "quiz '{}' has option label '{}', expected a single letter A-Z",
                    quiz.id, option.label
                )));
            }
            if !labels.insert(option.label.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "quiz '{}' repeats option label '{}'",
                    quiz.id, option.label
                )));
            }
        }

        let correct = quiz.options.iter().filter(|o| o.is_correct).count();
        if correct != 1 {
            return Err(CatalogError::Invalid(format!(
                "quiz '{}' must have exactly one correct option, found {}",
                quiz.id, correct
            )));
        }
    }

    Ok(())
}

fn option(label: &str, text: &str, is_correct: bool) -> QuizOption {
    QuizOption {
        label: label.to_string(),
        text: text.to_string(),
        is_correct,
    }
}

/// The quizzes shipped with the server.
pub fn default_catalog() -> Vec<Quiz> {
    vec![
        Quiz {
            id: "quiz_1".to_string(),
            question: "在小房间录音时，使用较长的混响时间会产生什么效果？".to_string(),
            options: vec![
                option("A", "让声音更干净清晰", false),
                option("B", "声音会显得浑浊模糊", true),
                option("C", "增强低频表现", false),
                option("D", "提高音量响度", false),
            ],
        },
        Quiz {
            id: "quiz_2".to_string(),
            question: "人耳通常能听到的频率范围大约是多少？".to_string(),
            options: vec![
                option("A", "2 Hz ~ 2 kHz", false),
                option("B", "200 Hz ~ 200 kHz", false),
                option("C", "20 Hz ~ 20 kHz", true),
                option("D", "2 kHz ~ 200 kHz", false),
            ],
        },
        Quiz {
            id: "quiz_3".to_string(),
            question: "混音时过度压缩动态范围，最常见的听感问题是什么？".to_string(),
            options: vec![
                option("A", "声音缺乏起伏，听久了容易疲劳", true),
                option("B", "立体声声像变宽", false),
                option("C", "高频自然增加", false),
                option("D", "底噪完全消失", false),
            ],
        },
    ]
}
