// LLM prompt constants for roadmap generation.

/// System prompt for roadmap generation — enforces JSON-only output.
pub const ROADMAP_SYSTEM: &str = "You are an expert career mentor who designs \
    learning roadmaps for people switching into technical roles. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Roadmap prompt template. Replace `{role}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a learning roadmap for someone targeting the role of "{role}".

Return a JSON ARRAY of 8 to 10 items, ordered from first thing to learn to last, with this EXACT schema (no extra fields):
[
  {
    "skill": "sql",
    "title": "Learn SQL for data access",
    "description": "One or two sentences on what to learn and why it matters for the role.",
    "resource": "https://example.com/a-well-known-free-resource"
  }
]

Rules:
- "skill" is a short lowercase identifier (one to three words) used for matching against a learner's existing skills.
- "title" is the human-readable step name shown in the UI.
- "description" is concise and practical, not motivational filler.
- "resource" is a single well-known, free, currently available URL.
- Order items so each step builds on the previous ones.
- Between 8 and 10 items. Never fewer, never more."#;
