//! Quiz generation — LLM-backed and memoized per skill, with a
//! fail-closed fallback.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::skill_gap::normalize;
use crate::cache::MemoCache;
use crate::llm_client::LlmClient;
use crate::quiz::prompts::{QUIZ_PROMPT_TEMPLATE, QUIZ_SYSTEM};

/// Questions per quiz — the generation contract asks for exactly this many.
pub const QUESTIONS_PER_QUIZ: usize = 3;
/// Options per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`.
    pub correct_answer: usize,
}

/// Returns the verification quiz for a skill.
///
/// Memoized per normalized skill name. A response that fails shape
/// validation is treated exactly like a transport failure: logged, and a
/// deterministic single-question placeholder is returned instead (and NOT
/// cached, so a later request can retry generation).
pub async fn generate_skill_quiz(
    llm: &LlmClient,
    cache: &MemoCache<Vec<QuizQuestion>>,
    skill: &str,
) -> Vec<QuizQuestion> {
    let key = normalize(skill);

    if let Some(cached) = cache.get(&key) {
        return cached;
    }

    let prompt = QUIZ_PROMPT_TEMPLATE.replace("{skill}", skill);

    match llm.call_json::<Vec<QuizQuestion>>(&prompt, QUIZ_SYSTEM).await {
        Ok(questions) if has_valid_shape(&questions) => {
            info!("Generated quiz for skill '{skill}'");
            cache.insert(key, questions.clone());
            questions
        }
        Ok(questions) => {
            warn!(
                "Quiz for '{skill}' had invalid shape ({} questions), using fallback",
                questions.len()
            );
            fallback_quiz(skill)
        }
        Err(e) => {
            warn!("Quiz generation for '{skill}' failed, using fallback: {e}");
            fallback_quiz(skill)
        }
    }
}

/// The generation contract: exactly 3 questions, 4 options each, with an
/// in-range correct answer.
fn has_valid_shape(questions: &[QuizQuestion]) -> bool {
    questions.len() == QUESTIONS_PER_QUIZ
        && questions.iter().all(|q| {
            q.options.len() == OPTIONS_PER_QUESTION && q.correct_answer < q.options.len()
        })
}

/// Deterministic placeholder quiz served when generation fails.
pub fn fallback_quiz(skill: &str) -> Vec<QuizQuestion> {
    vec![QuizQuestion {
        question: format!("Could not generate a quiz for {skill}."),
        options: vec![
            "Error".to_string(),
            "Error".to_string(),
            "Error".to_string(),
            "Error".to_string(),
        ],
        correct_answer: 0,
    }]
}
