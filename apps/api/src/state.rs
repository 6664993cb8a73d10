use std::sync::Arc;

use crate::cache::MemoCache;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::quiz::generator::QuizQuestion;
use crate::roadmap::generator::RoadmapItem;
use crate::store::SkillStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable storage collaborator. Production: `PgSkillStore`.
    pub store: Arc<dyn SkillStore>,
    pub llm: LlmClient,
    pub config: Config,
    /// Generated roadmaps, keyed by normalized role name. Owned here rather
    /// than living in a global so every consumer shares one bounded cache.
    pub roadmap_cache: Arc<MemoCache<Vec<RoadmapItem>>>,
    /// Generated quizzes, keyed by normalized skill name.
    pub quiz_cache: Arc<MemoCache<Vec<QuizQuestion>>>,
}
