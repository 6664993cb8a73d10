// LLM prompt constants for quiz generation.

/// System prompt for quiz generation — enforces JSON-only output.
pub const QUIZ_SYSTEM: &str = "You are a technical interviewer verifying \
    whether a candidate actually knows a skill. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Quiz prompt template. Replace `{skill}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Verify if a user knows about "{skill}".
Generate exactly 3 multiple-choice questions.
- Conceptual (how it works), not just syntax.
- Difficulty: Beginner to Intermediate.
- Each question has exactly 4 options and one correct answer.

Return a JSON ARRAY with this EXACT schema (no extra fields):
[
  {
    "question": "Question text",
    "options": ["A", "B", "C", "D"],
    "correct_answer": 0
  }
]

"correct_answer" is the 0-based index into "options"."#;
