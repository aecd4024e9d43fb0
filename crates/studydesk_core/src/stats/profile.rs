//! Learning activity aggregates for the profile view.

use crate::model::event::Event;
use crate::model::note::Note;
use crate::model::plan::StudyPlan;
use crate::model::test_result::TestResult;
use crate::stats::rounded_ratio;
use crate::temporal::parse::parse_calendar_date;
use serde::Serialize;
use std::collections::BTreeSet;

/// Headline counters of the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub notes_count: usize,
    pub tests_count: usize,
    pub study_days: usize,
    pub average_score_percent: u32,
}

impl ProfileStats {
    pub fn compute(
        notes: &[Note],
        tests: &[TestResult],
        events: &[Event],
        plans: &[StudyPlan],
    ) -> Self {
        Self {
            notes_count: notes.len(),
            tests_count: tests.len(),
            study_days: study_days(notes, tests, events, plans),
            average_score_percent: average_score_percent(tests),
        }
    }
}

/// Counts distinct calendar days with any recorded activity.
///
/// Uses note `date`, test `date`, event `date` and plan creation `date`.
/// Records sharing a day count once, whatever their kind.
pub fn study_days(
    notes: &[Note],
    tests: &[TestResult],
    events: &[Event],
    plans: &[StudyPlan],
) -> usize {
    let note_dates = notes.iter().map(|note| note.date.as_str());
    let test_dates = tests.iter().map(|test| test.date.as_str());
    let event_dates = events.iter().map(|event| event.date.as_str());
    let plan_dates = plans.iter().filter_map(|plan| plan.created_at.as_deref());

    note_dates
        .chain(test_dates)
        .chain(event_dates)
        .chain(plan_dates)
        .filter_map(parse_calendar_date)
        .collect::<BTreeSet<_>>()
        .len()
}

/// `round(100 * correct / total)` over all tests; 0 when no questions.
pub fn average_score_percent(tests: &[TestResult]) -> u32 {
    let (correct, total) = tests.iter().fold((0_u64, 0_u64), |(correct, total), test| {
        (
            correct + u64::from(test.correct_answers),
            total + u64::from(test.total_questions),
        )
    });
    let percent = rounded_ratio(correct * 100, total);
    u32::try_from(percent).unwrap_or(u32::MAX)
}
