//! Axum route handlers for generated roadmaps and learning resources.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::enrichment::{enrich, skills_to_learn, EnrichedRoadmapItem, GeneratedEntry};
use crate::dashboard::service::load_session;
use crate::errors::AppError;
use crate::models::resource::LearningResourceRow;
use crate::roadmap::generator::{generate_role_roadmap, RoadmapItem};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeneratedRoadmapResponse {
    pub role: String,
    /// Raw generated items, including description and resource link.
    pub items: Vec<RoadmapItem>,
    /// Generated items merged with the user's known/completed state.
    pub steps: Vec<EnrichedRoadmapItem>,
    pub skills_to_learn: Vec<String>,
}

/// GET /api/v1/users/:id/roadmap
///
/// Generates (or recalls from the per-role cache) a roadmap for the user's
/// target role and merges it with their current skill state. The merge is a
/// pure projection recomputed on every request.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<GeneratedRoadmapResponse>, AppError> {
    let session = load_session(state.store.as_ref(), user_id).await?;

    let items =
        generate_role_roadmap(&state.llm, &state.roadmap_cache, &session.user.target_role).await;

    let entries: Vec<GeneratedEntry> = items
        .iter()
        .map(|item| GeneratedEntry {
            skill: item.skill.clone(),
            title: item.title.clone(),
        })
        .collect();

    let steps = enrich(&entries, &session.known_skills, &session.completed_skills);
    let to_learn = skills_to_learn(&steps);

    Ok(Json(GeneratedRoadmapResponse {
        role: session.user.target_role.clone(),
        items,
        steps,
        skills_to_learn: to_learn,
    }))
}

/// GET /api/v1/skills/:skill/resources
///
/// Up to 3 curated resources for a skill; empty when none are recorded.
pub async fn handle_get_resources(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<Vec<LearningResourceRow>>, AppError> {
    let resources = state.store.get_learning_resources(&skill).await?;
    Ok(Json(resources))
}
