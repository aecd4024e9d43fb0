//! Dashboard and profile summaries over a snapshot of user collections.
//!
//! # Responsibility
//! - Decode the collections the data store hands over as one JSON snapshot.
//! - Derive the dashboard cards and the profile counters from them.
//!
//! # Invariants
//! - Summaries are recomputed on every call and never mutate the snapshot.
//! - The reference time and window sizes always come from the caller.

use crate::activity::{recent_activity, ActivityItem};
use crate::config::CoreConfig;
use crate::model::event::Event;
use crate::model::note::Note;
use crate::model::plan::StudyPlan;
use crate::model::test_result::TestResult;
use crate::model::ticket::SupportTicket;
use crate::stats::plan_stats::{aggregate_plans, MonthlyGoals};
use crate::stats::profile::ProfileStats;
use crate::temporal::window::{recent_notes, upcoming_events};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Collections of one user as read from the data store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudySnapshot {
    pub notes: Vec<Note>,
    pub events: Vec<Event>,
    pub plans: Vec<StudyPlan>,
    pub test_results: Vec<TestResult>,
    pub tickets: Vec<SupportTicket>,
}

impl StudySnapshot {
    /// Decodes a snapshot; missing collections are empty.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Events in the upcoming window, soonest first.
    pub upcoming_events: Vec<Event>,
    /// Notes in the recent window, newest first.
    pub recent_notes: Vec<Note>,
    pub monthly_goals: MonthlyGoals,
    pub overall_progress_percent: u8,
    pub overdue_plans: usize,
    pub recent_activity: Vec<ActivityItem>,
}

impl DashboardSummary {
    pub fn upcoming_count(&self) -> usize {
        self.upcoming_events.len()
    }

    pub fn recent_notes_count(&self) -> usize {
        self.recent_notes.len()
    }
}

/// Builds the dashboard relative to `now`.
pub fn build_dashboard(
    snapshot: &StudySnapshot,
    now: NaiveDateTime,
    config: &CoreConfig,
) -> DashboardSummary {
    let upcoming = upcoming_events(&snapshot.events, now, config.upcoming_days);
    let recent = recent_notes(&snapshot.notes, now, config.recent_days);
    let activity = recent_activity(
        &upcoming,
        &recent,
        config.activity_per_source,
        config.activity_max_items,
    );
    let plan_stats = aggregate_plans(&snapshot.plans, now);

    DashboardSummary {
        upcoming_events: upcoming.into_iter().cloned().collect(),
        recent_notes: recent.into_iter().cloned().collect(),
        monthly_goals: MonthlyGoals {
            completed: plan_stats.completed_this_month,
            total: plan_stats.due_this_month,
        },
        overall_progress_percent: plan_stats.overall_progress_percent,
        overdue_plans: plan_stats.overdue,
        recent_activity: activity,
    }
}

/// Builds the profile page counters.
pub fn build_profile(snapshot: &StudySnapshot) -> ProfileStats {
    ProfileStats::compute(
        &snapshot.notes,
        &snapshot.test_results,
        &snapshot.events,
        &snapshot.plans,
    )
}
