use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleRow {
    pub id: Uuid,
    pub role_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// One required skill of a role. `order_index` defines the intended learning
/// sequence; it is not guaranteed unique or gap-free.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleSkillRow {
    pub id: Uuid,
    pub role_id: Uuid,
    pub skill_name: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}
