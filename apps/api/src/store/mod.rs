//! Storage collaborator boundary.
//!
//! All persistence goes through the `SkillStore` trait. Handlers and the
//! dashboard session never touch SQL directly, so the store can be swapped
//! for an in-memory implementation in tests. `AppState` carries it as an
//! `Arc<dyn SkillStore>`.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resource::LearningResourceRow;
use crate::models::role::{RoleRow, RoleSkillRow};
use crate::models::user::UserRow;

/// The storage collaborator interface.
///
/// Absent users and unknown roles are represented as explicit absent values
/// (`None` / empty vec), never as errors; callers branch on them directly.
#[async_trait]
pub trait SkillStore: Send + Sync {
    /// All known career roles, ordered by role name.
    async fn get_roles(&self) -> Result<Vec<RoleRow>, AppError>;

    /// Required skills for a role in learning order.
    /// Returns an empty list when the role is unknown.
    async fn get_role_skills(&self, role_name: &str) -> Result<Vec<RoleSkillRow>, AppError>;

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        target_role: &str,
        experience_level: &str,
    ) -> Result<UserRow, AppError>;

    /// Records self-declared skills for a user. Names are trimmed before
    /// insert; duplicates of already-recorded skills are ignored.
    async fn add_user_skills(&self, user_id: Uuid, skills: &[String]) -> Result<(), AppError>;

    /// Skill names the user self-declared during onboarding.
    async fn get_user_skills(&self, user_id: Uuid) -> Result<Vec<String>, AppError>;

    /// Skill names the user has explicitly marked complete.
    async fn get_user_progress(&self, user_id: Uuid) -> Result<Vec<String>, AppError>;

    async fn mark_skill_complete(&self, user_id: Uuid, skill_name: &str)
        -> Result<(), AppError>;

    async fn mark_skill_incomplete(
        &self,
        user_id: Uuid,
        skill_name: &str,
    ) -> Result<(), AppError>;

    /// Up to 3 curated resources for a skill.
    async fn get_learning_resources(
        &self,
        skill_name: &str,
    ) -> Result<Vec<LearningResourceRow>, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError>;

    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserRow>, AppError>;
}
