//! Axum route handlers for skill-verification quizzes.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::skill_gap::normalize;
use crate::errors::AppError;
use crate::quiz::generator::{generate_skill_quiz, QuizQuestion};
use crate::quiz::grading::{grade, QuizResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub skill: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct QuizAnswersRequest {
    /// 0-based selected option per question, in question order.
    pub answers: Vec<usize>,
}

/// GET /api/v1/skills/:skill/quiz
///
/// Generates (or recalls from the per-skill cache) a 3-question verification
/// quiz. Generation failures degrade to a placeholder quiz, never an error.
pub async fn handle_get_quiz(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<QuizResponse>, AppError> {
    if skill.trim().is_empty() {
        return Err(AppError::Validation("skill name cannot be empty".to_string()));
    }

    let questions = generate_skill_quiz(&state.llm, &state.quiz_cache, &skill).await;

    Ok(Json(QuizResponse { skill, questions }))
}

/// POST /api/v1/skills/:skill/quiz/answers
///
/// Grades answers against the cached quiz for the skill. The quiz must have
/// been fetched (and cached) first; fallback quizzes are not cached, so
/// grading against one is rejected rather than silently failing the user.
pub async fn handle_grade_quiz(
    State(state): State<AppState>,
    Path(skill): Path<String>,
    Json(request): Json<QuizAnswersRequest>,
) -> Result<Json<QuizResult>, AppError> {
    let questions = state.quiz_cache.get(&normalize(&skill)).ok_or_else(|| {
        AppError::NotFound(format!("No active quiz for '{skill}'; fetch the quiz first"))
    })?;

    Ok(Json(grade(&questions, &request.answers)))
}
