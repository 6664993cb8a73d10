//! Quiz grading — pure scoring of submitted answers.

use serde::Serialize;

use crate::quiz::generator::QuizQuestion;

/// Minimum correct answers to count a skill as verified (2 of 3).
pub const PASS_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

/// Grades submitted answers against a quiz.
///
/// Answers are matched to questions by position; missing or surplus answers
/// count as wrong. Passing is `score >= PASS_THRESHOLD` regardless of quiz
/// length, so the single-question fallback quiz can never verify a skill.
pub fn grade(questions: &[QuizQuestion], answers: &[usize]) -> QuizResult {
    let score = questions
        .iter()
        .zip(answers.iter())
        .filter(|(q, a)| q.correct_answer == **a)
        .count();

    QuizResult {
        score,
        total: questions.len(),
        passed: score >= PASS_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Vec<QuizQuestion> {
        (0..3)
            .map(|i| QuizQuestion {
                question: format!("q{i}"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: i,
            })
            .collect()
    }

    #[test]
    fn test_all_correct_passes() {
        let result = grade(&quiz(), &[0, 1, 2]);
        assert_eq!(result.score, 3);
        assert_eq!(result.total, 3);
        assert!(result.passed);
    }

    #[test]
    fn test_two_of_three_passes() {
        let result = grade(&quiz(), &[0, 1, 0]);
        assert_eq!(result.score, 2);
        assert!(result.passed);
    }

    #[test]
    fn test_one_of_three_fails() {
        let result = grade(&quiz(), &[0, 0, 0]);
        assert_eq!(result.score, 1);
        assert!(!result.passed);
    }

    #[test]
    fn test_missing_answers_count_as_wrong() {
        let result = grade(&quiz(), &[0]);
        assert_eq!(result.score, 1);
        assert!(!result.passed);
    }

    #[test]
    fn test_surplus_answers_are_ignored() {
        let result = grade(&quiz(), &[0, 1, 2, 3, 0]);
        assert_eq!(result.score, 3);
        assert!(result.passed);
    }

    #[test]
    fn test_fallback_quiz_can_never_pass() {
        let fallback = crate::quiz::generator::fallback_quiz("React");
        let result = grade(&fallback, &[0]);
        assert_eq!(result.score, 1);
        assert!(!result.passed);
    }
}
