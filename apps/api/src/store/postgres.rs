//! PostgreSQL implementation of the storage collaborator.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resource::LearningResourceRow;
use crate::models::role::{RoleRow, RoleSkillRow};
use crate::models::user::UserRow;
use crate::store::SkillStore;

/// How many resources the store surfaces per skill.
const RESOURCE_LIMIT: i64 = 3;

pub struct PgSkillStore {
    pool: PgPool,
}

impl PgSkillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillStore for PgSkillStore {
    async fn get_roles(&self) -> Result<Vec<RoleRow>, AppError> {
        let roles = sqlx::query_as::<_, RoleRow>("SELECT * FROM roles ORDER BY role_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }

    async fn get_role_skills(&self, role_name: &str) -> Result<Vec<RoleSkillRow>, AppError> {
        let role_id: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM roles WHERE role_name = $1")
                .bind(role_name)
                .fetch_optional(&self.pool)
                .await?;

        let Some(role_id) = role_id else {
            return Ok(vec![]);
        };

        let skills = sqlx::query_as::<_, RoleSkillRow>(
            "SELECT * FROM role_skills WHERE role_id = $1 ORDER BY order_index",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(skills)
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        target_role: &str,
        experience_level: &str,
    ) -> Result<UserRow, AppError> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, target_role, experience_level)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(target_role)
        .bind(experience_level)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn add_user_skills(&self, user_id: Uuid, skills: &[String]) -> Result<(), AppError> {
        let trimmed: Vec<String> = skills
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if trimmed.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO user_skills (user_id, skill_name)
            SELECT $1, UNNEST($2::text[])
            ON CONFLICT (user_id, skill_name) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(&trimmed)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_user_skills(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let skills =
            sqlx::query_scalar("SELECT skill_name FROM user_skills WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(skills)
    }

    async fn get_user_progress(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let skills =
            sqlx::query_scalar("SELECT skill_name FROM user_progress WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(skills)
    }

    async fn mark_skill_complete(
        &self,
        user_id: Uuid,
        skill_name: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_progress (user_id, skill_name)
            VALUES ($1, $2)
            ON CONFLICT (user_id, skill_name) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(skill_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn mark_skill_incomplete(
        &self,
        user_id: Uuid,
        skill_name: &str,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM user_progress WHERE user_id = $1 AND skill_name = $2")
            .bind(user_id)
            .bind(skill_name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_learning_resources(
        &self,
        skill_name: &str,
    ) -> Result<Vec<LearningResourceRow>, AppError> {
        let resources = sqlx::query_as::<_, LearningResourceRow>(
            "SELECT * FROM learning_resources WHERE skill_name = $1 LIMIT $2",
        )
        .bind(skill_name)
        .bind(RESOURCE_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(resources)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserRow>, AppError> {
        let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
