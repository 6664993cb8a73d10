//! Per-request dashboard session and the optimistic skill toggle.
//!
//! A session holds the locally reconciled view of one user's records. The
//! toggle flips local state first, then writes through to the store; on
//! store failure the local flip is reverted and the failure is returned as
//! an explicit `ToggleOutcome` value so callers can react (retry, surface a
//! message) instead of reading it off a log.

use serde::Serialize;
use tracing::warn;

use crate::analysis::progress::ProgressSummary;
use crate::analysis::skill_gap::{
    analyze_skill_gap, normalize, RequiredSkill, SkillGapAnalysis,
};
use crate::models::user::UserRow;
use crate::store::SkillStore;

/// One user's loaded dashboard state: profile, self-declared skills,
/// completed skills, and the target role's required-skill list.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    pub user: UserRow,
    pub known_skills: Vec<String>,
    pub completed_skills: Vec<String>,
    pub required_skills: Vec<RequiredSkill>,
}

/// Result of a toggle: either the write stuck, or it failed and the local
/// state was rolled back to its pre-toggle value.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ToggleOutcome {
    Applied { skill: String, completed: bool },
    RolledBack { skill: String, error: String },
}

impl DashboardSession {
    /// Gap analysis over the current local state.
    pub fn analysis(&self) -> SkillGapAnalysis {
        analyze_skill_gap(
            &self.required_skills,
            &self.known_skills,
            &self.completed_skills,
        )
    }

    /// Progress over the required-skill count and the completion-list length.
    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary::new(self.required_skills.len(), self.completed_skills.len())
    }

    fn is_completed(&self, skill: &str) -> bool {
        let target = normalize(skill);
        self.completed_skills.iter().any(|s| normalize(s) == target)
    }

    /// Optimistically marks a skill complete or incomplete.
    ///
    /// The local completion list flips before the store call. Concurrent
    /// toggles of the same skill are not sequenced; the last write observed
    /// locally wins, independent of server-side ordering.
    pub async fn set_completed(
        &mut self,
        store: &dyn SkillStore,
        skill: &str,
        completed: bool,
    ) -> ToggleOutcome {
        let before = self.completed_skills.clone();

        if completed {
            if !self.is_completed(skill) {
                self.completed_skills.push(skill.to_string());
            }
        } else {
            let target = normalize(skill);
            self.completed_skills.retain(|s| normalize(s) != target);
        }

        let write = if completed {
            store.mark_skill_complete(self.user.id, skill).await
        } else {
            store.mark_skill_incomplete(self.user.id, skill).await
        };

        match write {
            Ok(()) => ToggleOutcome::Applied {
                skill: skill.to_string(),
                completed,
            },
            Err(e) => {
                self.completed_skills = before;
                warn!(
                    "Toggle of '{skill}' for user {} failed, rolled back: {e}",
                    self.user.id
                );
                ToggleOutcome::RolledBack {
                    skill: skill.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }
}
