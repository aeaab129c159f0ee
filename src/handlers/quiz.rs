// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::quiz::{AnswerResult, PublicQuiz, Quiz, SubmitAnswerRequest},
    scoring,
    store::{NewAnswer, Store},
    utils::extract::ValidJson,
};

fn find_quiz<'a>(store: &'a Store, quiz_id: &str) -> Result<&'a Quiz, AppError> {
    store.quiz(quiz_id).ok_or_else(|| {
        tracing::warn!("Unknown quiz requested: {}", quiz_id);
        AppError::NotFound("Quiz not found".to_string())
    })
}

/// Lists every quiz without answer keys.
pub async fn list_quizzes(State(store): State<Arc<Store>>) -> impl IntoResponse {
    let quizzes: Vec<PublicQuiz> = store.quizzes().iter().map(PublicQuiz::from).collect();
    Json(quizzes)
}

/// Returns one quiz without its answer key.
pub async fn get_quiz(
    State(store): State<Arc<Store>>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = find_quiz(&store, &quiz_id)?;
    Ok(Json(PublicQuiz::from(quiz)))
}

/// Submits one answer.
///
/// * Unknown quiz -> 404, unknown option label -> 400.
/// * Every submission is recorded, repeats included.
/// * Correct answers are worth 10 points; wrong answers cost nothing.
pub async fn submit_answer(
    State(store): State<Arc<Store>>,
    ValidJson(req): ValidJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = find_quiz(&store, &req.quiz_id)?;

    let correct = quiz.correct_option().ok_or_else(|| {
        AppError::InternalServerError(format!("Quiz {} has no correct option", quiz.id))
    })?;

    if quiz.option(&req.selected_option).is_none() {
        return Err(AppError::BadRequest(format!(
            "Invalid option '{}' for quiz {}",
            req.selected_option, quiz.id
        )));
    }

    let is_correct = req.selected_option == correct.label;
    let correct_answer = correct.label.clone();

    let (record, score) = store
        .record_answer(NewAnswer {
            user_name: req.user_name,
            user_id: req.user_id,
            quiz_id: req.quiz_id,
            selected_option: req.selected_option,
            is_correct,
        })
        .await;

    tracing::info!(
        record_id = record.id,
        user = %record.user_name,
        quiz = %record.quiz_id,
        is_correct,
        "Answer recorded"
    );

    let message = if is_correct {
        "Correct answer!"
    } else {
        "Wrong answer, try again"
    };

    Ok(Json(AnswerResult {
        is_correct,
        correct_answer,
        message: message.to_string(),
        score,
    }))
}

/// Per-option selection counts and accuracy for one quiz.
pub async fn quiz_stats(
    State(store): State<Arc<Store>>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = find_quiz(&store, &quiz_id)?;
    let records = store.records().await;

    Ok(Json(scoring::quiz_stats(quiz, &records)))
}
