//! Study plan aggregates for the planning and dashboard views.

use crate::model::plan::{PlanStatus, StudyPlan};
use crate::stats::rounded_ratio;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Status buckets and headline numbers for a plan collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub total: usize,
    /// All-time done plans.
    pub completed: usize,
    /// Done plans due in the reference month.
    pub completed_this_month: usize,
    /// Plans due in the reference month.
    pub due_this_month: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub overdue: usize,
    pub overall_progress_percent: u8,
}

/// Monthly goal counter shown as `completed/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGoals {
    pub completed: usize,
    pub total: usize,
}

/// Computes plan statistics relative to `now`.
pub fn aggregate_plans(plans: &[StudyPlan], now: NaiveDateTime) -> PlanStats {
    let today = now.date();
    let mut stats = PlanStats {
        total: plans.len(),
        overall_progress_percent: overall_progress_percent(plans),
        ..PlanStats::default()
    };

    for plan in plans {
        match plan.status() {
            PlanStatus::Done => stats.completed += 1,
            PlanStatus::InProgress => stats.in_progress += 1,
            PlanStatus::Pending => stats.pending += 1,
        }

        if is_overdue(plan, now) {
            stats.overdue += 1;
        }

        if plan.due_on().is_some_and(|due| same_month(due, today)) {
            stats.due_this_month += 1;
            if plan.is_done() {
                stats.completed_this_month += 1;
            }
        }
    }

    stats
}

/// A plan is overdue when it is not done and its due date (at midnight) is
/// before `now`. Malformed due dates are never overdue.
pub fn is_overdue(plan: &StudyPlan, now: NaiveDateTime) -> bool {
    if plan.is_done() {
        return false;
    }
    plan.due_on()
        .and_then(|due| due.and_hms_opt(0, 0, 0))
        .is_some_and(|due_at| due_at < now)
}

/// Plans due in the reference month and how many of them are done.
pub fn monthly_goals(plans: &[StudyPlan], now: NaiveDateTime) -> MonthlyGoals {
    let stats = aggregate_plans(plans, now);
    MonthlyGoals {
        completed: stats.completed_this_month,
        total: stats.due_this_month,
    }
}

/// Mean plan progress rounded to a whole percent; 0 for no plans.
pub fn overall_progress_percent(plans: &[StudyPlan]) -> u8 {
    let sum: u64 = plans.iter().map(|plan| u64::from(plan.progress())).sum();
    let mean = rounded_ratio(sum, plans.len() as u64);
    u8::try_from(mean).unwrap_or(u8::MAX)
}

fn same_month(left: NaiveDate, right: NaiveDate) -> bool {
    left.year() == right.year() && left.month() == right.month()
}
