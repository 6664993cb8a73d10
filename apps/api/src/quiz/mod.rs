// Skill-verification quizzes: LLM generation with a bounded per-skill memo
// cache, shape validation with a deterministic fallback, and pure grading.
// All LLM calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod grading;
pub mod handlers;
pub mod prompts;
