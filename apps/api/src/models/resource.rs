use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A curated learning resource for a skill (video, documentation, course).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningResourceRow {
    pub id: Uuid,
    pub skill_name: String,
    pub resource_type: String,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
