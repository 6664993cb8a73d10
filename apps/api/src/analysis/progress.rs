//! Progress aggregation — completion percentage over a required-skill count.

use serde::Serialize;

/// Completion summary, recomputed on demand and never stored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub percentage: u32,
}

impl ProgressSummary {
    pub fn new(total: usize, completed: usize) -> Self {
        Self {
            total,
            completed,
            percentage: progress_percentage(total, completed),
        }
    }
}

/// Percentage of completed skills, rounded half-up.
///
/// `total == 0` returns 0, the defined zero-division policy, so no NaN ever
/// reaches a caller. The result is NOT clamped to 100: a caller that sums
/// overlapping known/completed counts can legitimately exceed it, and
/// clamping for display is presentation policy, not aggregation policy.
pub fn progress_percentage(total: usize, completed: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_returns_zero() {
        assert_eq!(progress_percentage(0, 0), 0);
        assert_eq!(progress_percentage(0, 5), 0);
    }

    #[test]
    fn test_exact_half() {
        assert_eq!(progress_percentage(4, 2), 50);
    }

    #[test]
    fn test_rounds_half_up() {
        // 33.33 → 33, 66.67 → 67
        assert_eq!(progress_percentage(3, 1), 33);
        assert_eq!(progress_percentage(3, 2), 67);
        // 12.5 → 13
        assert_eq!(progress_percentage(8, 1), 13);
    }

    #[test]
    fn test_complete_is_one_hundred() {
        assert_eq!(progress_percentage(7, 7), 100);
    }

    #[test]
    fn test_no_clamping_above_one_hundred() {
        assert_eq!(progress_percentage(4, 5), 125);
    }

    #[test]
    fn test_summary_packages_percentage() {
        let summary = ProgressSummary::new(3, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.percentage, 67);
    }
}
