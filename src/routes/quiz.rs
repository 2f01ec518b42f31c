use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{QuizAnswer, QuizQuestion, QuizResult},
    routes::AppState,
    services::quiz,
};

/// The static question set for the style quiz.
pub async fn questions() -> Json<Vec<QuizQuestion>> {
    Json(quiz::questions())
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: Vec<QuizAnswer>,
}

/// Completes a quiz session: classifies the answers, persists the result
/// and folds the winning style into the profile.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitQuizRequest>,
) -> AppResult<Json<QuizResult>> {
    let result = state.profile.complete_quiz(request.answers).await?;
    Ok(Json(result))
}

/// The latest stored quiz result.
pub async fn result(State(state): State<Arc<AppState>>) -> AppResult<Json<QuizResult>> {
    match state.profile.quiz_result().await {
        Some(result) => Ok(Json(result)),
        None => Err(AppError::NotFound("No quiz completed yet".to_string())),
    }
}
