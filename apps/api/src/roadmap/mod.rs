// Generated learning roadmaps: LLM generation with a bounded per-role memo
// cache, deterministic fallback, and enrichment with the user's state.
// All LLM calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
