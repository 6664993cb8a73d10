//! In-memory `SkillStore` used by unit tests.
//!
//! Mirrors the Postgres implementation's observable behavior: unknown roles
//! yield empty skill lists, duplicate progress marks are ignored, and the
//! resource query is capped at 3 rows. Write failures can be injected to
//! exercise the optimistic-toggle rollback path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resource::LearningResourceRow;
use crate::models::role::{RoleRow, RoleSkillRow};
use crate::models::user::UserRow;
use crate::store::SkillStore;

#[derive(Default)]
struct State {
    users: Vec<UserRow>,
    user_skills: HashMap<Uuid, Vec<String>>,
    user_progress: HashMap<Uuid, Vec<String>>,
    roles: Vec<RoleRow>,
    role_skills: HashMap<Uuid, Vec<RoleSkillRow>>,
    resources: Vec<LearningResourceRow>,
}

#[derive(Default)]
pub struct MemorySkillStore {
    state: Mutex<State>,
    fail_writes: AtomicBool,
}

impl MemorySkillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every write operation fails with an internal error,
    /// simulating an unavailable collaborator.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn seed_role(&self, role_name: &str, description: &str, skills: &[(&str, i32)]) {
        let mut state = self.state.lock().unwrap();
        let role_id = Uuid::new_v4();
        state.roles.push(RoleRow {
            id: role_id,
            role_name: role_name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        });
        let rows = skills
            .iter()
            .map(|(name, order)| RoleSkillRow {
                id: Uuid::new_v4(),
                role_id,
                skill_name: name.to_string(),
                order_index: *order,
                created_at: Utc::now(),
            })
            .collect();
        state.role_skills.insert(role_id, rows);
    }

    fn check_writable(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(AppError::Internal(anyhow!("store unavailable (injected)")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SkillStore for MemorySkillStore {
    async fn get_roles(&self) -> Result<Vec<RoleRow>, AppError> {
        let state = self.state.lock().unwrap();
        let mut roles = state.roles.clone();
        roles.sort_by(|a, b| a.role_name.cmp(&b.role_name));
        Ok(roles)
    }

    async fn get_role_skills(&self, role_name: &str) -> Result<Vec<RoleSkillRow>, AppError> {
        let state = self.state.lock().unwrap();
        let Some(role) = state.roles.iter().find(|r| r.role_name == role_name) else {
            return Ok(vec![]);
        };
        let mut skills = state.role_skills.get(&role.id).cloned().unwrap_or_default();
        skills.sort_by_key(|s| s.order_index);
        Ok(skills)
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        target_role: &str,
        experience_level: &str,
    ) -> Result<UserRow, AppError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict(format!(
                "User with email {email} already exists"
            )));
        }
        let now = Utc::now();
        let user = UserRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            target_role: target_role.to_string(),
            experience_level: experience_level.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn add_user_skills(&self, user_id: Uuid, skills: &[String]) -> Result<(), AppError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let entry = state.user_skills.entry(user_id).or_default();
        for skill in skills {
            let trimmed = skill.trim().to_string();
            if !trimmed.is_empty() && !entry.contains(&trimmed) {
                entry.push(trimmed);
            }
        }
        Ok(())
    }

    async fn get_user_skills(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.user_skills.get(&user_id).cloned().unwrap_or_default())
    }

    async fn get_user_progress(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.user_progress.get(&user_id).cloned().unwrap_or_default())
    }

    async fn mark_skill_complete(
        &self,
        user_id: Uuid,
        skill_name: &str,
    ) -> Result<(), AppError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let entry = state.user_progress.entry(user_id).or_default();
        if !entry.iter().any(|s| s == skill_name) {
            entry.push(skill_name.to_string());
        }
        Ok(())
    }

    async fn mark_skill_incomplete(
        &self,
        user_id: Uuid,
        skill_name: &str,
    ) -> Result<(), AppError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if let Some(entry) = state.user_progress.get_mut(&user_id) {
            entry.retain(|s| s != skill_name);
        }
        Ok(())
    }

    async fn get_learning_resources(
        &self,
        skill_name: &str,
    ) -> Result<Vec<LearningResourceRow>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .resources
            .iter()
            .filter(|r| r.skill_name == skill_name)
            .take(3)
            .cloned()
            .collect())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserRow>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == user_id).cloned())
    }
}
