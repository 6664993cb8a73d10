//! Axum route handlers for the dashboard and the skill toggle.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::progress::ProgressSummary;
use crate::analysis::skill_gap::RoadmapStep;
use crate::dashboard::service::load_session;
use crate::dashboard::session::ToggleOutcome;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserRow,
    pub known_skills: Vec<String>,
    pub completed_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
    pub progress: ProgressSummary,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub outcome: ToggleOutcome,
    pub roadmap: Vec<RoadmapStep>,
    pub progress: ProgressSummary,
}

/// GET /api/v1/users/:id/dashboard
///
/// Loads profile, known skills, and completion list concurrently, resolves
/// the target role's required skills, and returns the full derived view.
pub async fn handle_get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = load_session(state.store.as_ref(), user_id).await?;
    let analysis = session.analysis();
    let progress = session.progress();

    Ok(Json(DashboardResponse {
        known_skills: session.known_skills,
        completed_skills: session.completed_skills,
        matching_skills: analysis.matching,
        missing_skills: analysis.missing,
        roadmap: analysis.roadmap,
        progress,
        user: session.user,
    }))
}

/// PUT /api/v1/users/:id/progress/:skill
pub async fn handle_mark_complete(
    State(state): State<AppState>,
    Path((user_id, skill)): Path<(Uuid, String)>,
) -> Result<Json<ToggleResponse>, AppError> {
    toggle(state, user_id, &skill, true).await
}

/// DELETE /api/v1/users/:id/progress/:skill
pub async fn handle_mark_incomplete(
    State(state): State<AppState>,
    Path((user_id, skill)): Path<(Uuid, String)>,
) -> Result<Json<ToggleResponse>, AppError> {
    toggle(state, user_id, &skill, false).await
}

/// Shared toggle flow: load the session, flip optimistically, and return the
/// reconciled roadmap. A rolled-back toggle is still a 200; the outcome
/// field carries the failure, and the roadmap reflects the reverted state.
async fn toggle(
    state: AppState,
    user_id: Uuid,
    skill: &str,
    completed: bool,
) -> Result<Json<ToggleResponse>, AppError> {
    if skill.trim().is_empty() {
        return Err(AppError::Validation("skill name cannot be empty".to_string()));
    }

    let mut session = load_session(state.store.as_ref(), user_id).await?;
    let outcome = session
        .set_completed(state.store.as_ref(), skill, completed)
        .await;
    let analysis = session.analysis();

    Ok(Json(ToggleResponse {
        outcome,
        roadmap: analysis.roadmap,
        progress: session.progress(),
    }))
}
