//! Skill-gap analysis — partitions a role's required skills into matching
//! and missing against what the user knows or has completed, and derives the
//! ordered learning roadmap.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Canonical form of a skill name for comparison: trimmed, lowercased.
/// Two names denote the same skill iff their normalized forms are equal.
/// No stemming, no synonym resolution.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A required skill of a role, in its intended learning sequence.
/// Supplied externally and treated as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Missing,
    Completed,
}

/// One step of the derived roadmap. Regenerated on every analysis pass,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub skill: String,
    pub order: i32,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGapAnalysis {
    /// Required skills the user knows or has completed, in input order,
    /// original casing preserved.
    pub matching: Vec<String>,
    /// Required skills neither known nor completed, in input order.
    pub missing: Vec<String>,
    /// All required skills with status, sorted ascending by `order`
    /// (stable on ties).
    pub roadmap: Vec<RoadmapStep>,
}

/// Partitions `required` into matching/missing and builds the roadmap.
///
/// A skill the user merely knows (self-declared, never formally completed)
/// still reports roadmap status `Completed`; the two concepts collapse into
/// one displayed status.
///
/// Duplicates in `required` are not suppressed: each occurrence is processed
/// independently. `matching.len() + missing.len() == required.len()` always
/// holds.
pub fn analyze_skill_gap(
    required: &[RequiredSkill],
    known: &[String],
    completed: &[String],
) -> SkillGapAnalysis {
    let known_set: HashSet<String> = known.iter().map(|s| normalize(s)).collect();
    let completed_set: HashSet<String> = completed.iter().map(|s| normalize(s)).collect();

    let mut matching = Vec::new();
    let mut missing = Vec::new();
    let mut roadmap = Vec::new();

    for r in required {
        let normalized = normalize(&r.name);
        let is_known = known_set.contains(&normalized);
        let is_completed = completed_set.contains(&normalized);

        if is_known || is_completed {
            matching.push(r.name.clone());
        } else {
            missing.push(r.name.clone());
        }

        roadmap.push(RoadmapStep {
            skill: r.name.clone(),
            order: r.order,
            status: if is_known || is_completed {
                StepStatus::Completed
            } else {
                StepStatus::Missing
            },
        });
    }

    // Stable: ties keep input order.
    roadmap.sort_by_key(|step| step.order);

    SkillGapAnalysis {
        matching,
        missing,
        roadmap,
    }
}
