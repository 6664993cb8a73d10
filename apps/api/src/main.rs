mod analysis;
mod cache;
mod config;
mod dashboard;
mod db;
mod errors;
mod llm_client;
mod models;
mod onboarding;
mod quiz;
mod roadmap;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::MemoCache;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgSkillStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LearnFlow API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the storage collaborator
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgSkillStore::new(db));
    info!("Skill store initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Generation caches: bounded, per-role and per-skill
    let roadmap_cache = Arc::new(MemoCache::new(config.generation_cache_capacity));
    let quiz_cache = Arc::new(MemoCache::new(config.generation_cache_capacity));
    info!(
        "Generation caches initialized (capacity: {})",
        config.generation_cache_capacity
    );

    // Build app state
    let state = AppState {
        store,
        llm,
        config: config.clone(),
        roadmap_cache,
        quiz_cache,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
