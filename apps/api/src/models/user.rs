use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A learner profile. `target_role` is free text and is matched against
/// `roles.role_name` when building the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub target_role: String,
    pub experience_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
