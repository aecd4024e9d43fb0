//! Date-keyed views over study plans for the planning calendar.

use crate::model::plan::StudyPlan;
use crate::temporal::parse::parse_due_date;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Plans due exactly on `date`, in input order.
pub fn plans_for_date(plans: &[StudyPlan], date: NaiveDate) -> Vec<&StudyPlan> {
    plans
        .iter()
        .filter(|plan| parse_due_date(&plan.due_date) == Some(date))
        .collect()
}

/// Distinct due dates that carry at least one plan, ascending.
pub fn dates_with_plans(plans: &[StudyPlan]) -> Vec<NaiveDate> {
    plans
        .iter()
        .filter_map(|plan| parse_due_date(&plan.due_date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
