//! Roadmap enrichment — merges a generated roadmap with locally tracked
//! completion state.
//!
//! This is a pure projection: it must be recomputed whenever the generated
//! items or the user's skill sets change, never patched incrementally, so
//! the displayed roadmap cannot desynchronize from the selected role.

use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::skill_gap::{normalize, StepStatus};

/// A generated roadmap entry as it enters enrichment: a short matching key
/// plus a human-readable title. The two are never assumed equal; matching
/// always uses `skill`.
#[derive(Debug, Clone)]
pub struct GeneratedEntry {
    pub skill: String,
    pub title: String,
}

/// A roadmap step annotated with its display title and the user's state.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRoadmapItem {
    pub skill: String,
    /// Presentation-only; carried verbatim, never normalized.
    pub display_title: String,
    /// 1-based position in the generated sequence.
    pub order: i32,
    pub status: StepStatus,
}

/// Assigns each generated item its 1-based order and a status: `Completed`
/// iff the normalized skill appears in the normalized union of `known` and
/// `completed`, else `Missing`. Input order is preserved.
pub fn enrich(
    generated: &[GeneratedEntry],
    known: &[String],
    completed: &[String],
) -> Vec<EnrichedRoadmapItem> {
    let owned: HashSet<String> = known
        .iter()
        .chain(completed.iter())
        .map(|s| normalize(s))
        .collect();

    generated
        .iter()
        .enumerate()
        .map(|(i, entry)| EnrichedRoadmapItem {
            skill: entry.skill.clone(),
            display_title: entry.title.clone(),
            order: (i + 1) as i32,
            status: if owned.contains(&normalize(&entry.skill)) {
                StepStatus::Completed
            } else {
                StepStatus::Missing
            },
        })
        .collect()
}

/// The complement view surfaced in the UI: every item still missing, in
/// input order.
pub fn skills_to_learn(items: &[EnrichedRoadmapItem]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.status == StepStatus::Missing)
        .map(|item| item.skill.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(items: &[(&str, &str)]) -> Vec<GeneratedEntry> {
        items
            .iter()
            .map(|(skill, title)| GeneratedEntry {
                skill: skill.to_string(),
                title: title.to_string(),
            })
            .collect()
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_orders_are_one_based_input_positions() {
        let items = enrich(&generated(&[("sql", "Learn SQL"), ("git", "Learn Git")]), &[], &[]);
        assert_eq!(items[0].order, 1);
        assert_eq!(items[1].order, 2);
    }

    #[test]
    fn test_status_uses_known_and_completed_union() {
        let items = enrich(
            &generated(&[("sql", "SQL"), ("git", "Git"), ("docker", "Docker")]),
            &skills(&["SQL"]),
            &skills(&["git"]),
        );
        assert_eq!(items[0].status, StepStatus::Completed);
        assert_eq!(items[1].status, StepStatus::Completed);
        assert_eq!(items[2].status, StepStatus::Missing);
    }

    #[test]
    fn test_matching_uses_skill_key_not_title() {
        // Title matches a known skill, key does not; it must stay missing.
        let items = enrich(
            &generated(&[("adv-sql", "SQL")]),
            &skills(&["SQL"]),
            &[],
        );
        assert_eq!(items[0].status, StepStatus::Missing);
        assert_eq!(items[0].display_title, "SQL");
    }

    #[test]
    fn test_display_title_is_verbatim() {
        let items = enrich(&generated(&[("sql", "  Master SQL!  ")]), &[], &[]);
        assert_eq!(items[0].display_title, "  Master SQL!  ");
    }

    #[test]
    fn test_skills_to_learn_preserves_input_order() {
        let items = enrich(
            &generated(&[("c", "C"), ("a", "A"), ("b", "B")]),
            &skills(&["a"]),
            &[],
        );
        assert_eq!(skills_to_learn(&items), vec!["c", "b"]);
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let gen = generated(&[("sql", "SQL"), ("git", "Git")]);
        let known = skills(&["sql"]);
        let completed = skills(&["GIT "]);
        let first = enrich(&gen, &known, &completed);
        let second = enrich(&gen, &known, &completed);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_generated_yields_empty() {
        let items = enrich(&[], &skills(&["sql"]), &skills(&["git"]));
        assert!(items.is_empty());
        assert!(skills_to_learn(&items).is_empty());
    }
}
