//! Dashboard loading — the all-or-nothing concurrent fan-out over the store.

use tracing::info;
use uuid::Uuid;

use crate::analysis::skill_gap::RequiredSkill;
use crate::dashboard::session::DashboardSession;
use crate::errors::AppError;
use crate::store::SkillStore;

/// Loads everything a dashboard needs in one pass.
///
/// Profile, known skills, and completion list are fetched concurrently; if
/// any one fails the whole load fails. The role's required skills are then
/// resolved from the profile's target role (empty when the role is unknown
/// to the catalog).
pub async fn load_session(
    store: &dyn SkillStore,
    user_id: Uuid,
) -> Result<DashboardSession, AppError> {
    let (user, known_skills, completed_skills) = tokio::try_join!(
        store.get_user(user_id),
        store.get_user_skills(user_id),
        store.get_user_progress(user_id),
    )?;

    let user = user.ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let required_skills: Vec<RequiredSkill> = store
        .get_role_skills(&user.target_role)
        .await?
        .into_iter()
        .map(|row| RequiredSkill {
            name: row.skill_name,
            order: row.order_index,
        })
        .collect();

    info!(
        "Loaded dashboard session for user {user_id}: {} known, {} completed, {} required",
        known_skills.len(),
        completed_skills.len(),
        required_skills.len()
    );

    Ok(DashboardSession {
        user,
        known_skills,
        completed_skills,
        required_skills,
    })
}
