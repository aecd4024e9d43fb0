//! Aggregate statistics over study collections.
//!
//! # Responsibility
//! - Summarize study plans (status buckets, monthly goals, overdue count).
//! - Summarize learning activity (distinct study days, test score average).
//!
//! # Invariants
//! - Every aggregate is recomputed from its inputs; nothing is cached.
//! - Empty inputs yield zeroes, never a division by zero.
//! - Percentages round half up, matching what the views display.

pub mod plan_stats;
pub mod profile;

pub use plan_stats::{
    aggregate_plans, is_overdue, monthly_goals, overall_progress_percent, MonthlyGoals, PlanStats,
};
pub use profile::{average_score_percent, study_days, ProfileStats};

/// `round(numerator / denominator)` with halves rounded up; 0 when
/// `denominator` is 0.
pub(crate) fn rounded_ratio(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator * 2 + denominator) / (denominator * 2)
}
