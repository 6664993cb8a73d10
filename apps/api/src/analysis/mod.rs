// Pure skill-gap analysis. No I/O and no failure modes; all fallibility
// lives at the store and LLM boundaries, never here.

pub mod enrichment;
pub mod progress;
pub mod skill_gap;
