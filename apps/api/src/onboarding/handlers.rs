//! Axum route handlers for onboarding and account lookup.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::role::{RoleRow, RoleSkillRow};
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub target_role: String,
    pub experience_level: String,
    /// Self-declared skills recorded at signup. Optional.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillsRequest {
    pub skills: Vec<String>,
}

/// GET /api/v1/roles
pub async fn handle_get_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleRow>>, AppError> {
    let roles = state.store.get_roles().await?;
    Ok(Json(roles))
}

/// GET /api/v1/roles/:role_name/skills
///
/// Required skills in learning order; empty for a role the catalog does not
/// know (absent role is not an error).
pub async fn handle_get_role_skills(
    State(state): State<AppState>,
    Path(role_name): Path<String>,
) -> Result<Json<Vec<RoleSkillRow>>, AppError> {
    let skills = state.store.get_role_skills(&role_name).await?;
    Ok(Json(skills))
}

/// POST /api/v1/users
///
/// Creates a profile and records any initial skills. Email uniqueness is
/// checked up front and surfaced as a conflict.
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRow>), AppError> {
    let name = request.name.trim();
    let email = request.email.trim();
    let target_role = request.target_role.trim();

    if name.is_empty() || email.is_empty() || target_role.is_empty() {
        return Err(AppError::Validation(
            "name, email, and target_role are required".to_string(),
        ));
    }

    if state.store.find_user_by_email(email).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "An account already exists for {email}"
        )));
    }

    let user = state
        .store
        .create_user(name, email, target_role, request.experience_level.trim())
        .await?;

    if !request.skills.is_empty() {
        state.store.add_user_skills(user.id, &request.skills).await?;
    }

    info!(
        "Created user {} targeting '{}' with {} initial skills",
        user.id,
        user.target_role,
        request.skills.len()
    );

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/v1/auth/login
///
/// Email-only lookup. An unknown email is a not-found, not an error.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserRow>, AppError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }

    let user = state
        .store
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| AppError::NotFound("No account found for this email".to_string()))?;

    Ok(Json(user))
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserRow>, AppError> {
    let user = state
        .store
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
    Ok(Json(user))
}

/// GET /api/v1/users/:id/skills
pub async fn handle_get_user_skills(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<String>>, AppError> {
    let skills = state.store.get_user_skills(user_id).await?;
    Ok(Json(skills))
}

/// POST /api/v1/users/:id/skills
///
/// Adds self-declared skills and returns the updated list.
pub async fn handle_add_user_skills(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AddSkillsRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    if request.skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation(
            "at least one non-empty skill is required".to_string(),
        ));
    }

    state
        .store
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    state.store.add_user_skills(user_id, &request.skills).await?;
    let skills = state.store.get_user_skills(user_id).await?;
    Ok(Json(skills))
}

/// GET /api/v1/users/:id/progress
pub async fn handle_get_user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<String>>, AppError> {
    let completed = state.store.get_user_progress(user_id).await?;
    Ok(Json(completed))
}
