//! Study plan use-case service.
//!
//! # Responsibility
//! - Create, edit, progress and delete plans through a repository.
//! - Expose plan statistics and calendar views over stored plans.
//!
//! # Invariants
//! - Progress changes go through `StudyPlan::set_progress` only.
//! - Detail edits keep progress and status untouched.
//! - New plans are stamped with the caller's reference date.

use crate::model::plan::{PlanDraft, PlanId, PlanValidationError, StudyPlan};
use crate::repo::plan_repo::PlanRepository;
use crate::repo::RepoError;
use crate::stats::plan_stats::{aggregate_plans, PlanStats};
use crate::temporal::calendar;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CREATED_AT_FORMAT: &str = "%Y-%m-%d";

/// Service error for plan use-cases.
#[derive(Debug)]
pub enum PlanServiceError {
    Validation(PlanValidationError),
    PlanNotFound(PlanId),
    Repo(RepoError),
}

impl Display for PlanServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PlanNotFound(id) => write!(f, "study plan not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlanServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::PlanNotFound(_) => None,
        }
    }
}

impl From<PlanValidationError> for PlanServiceError {
    fn from(value: PlanValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for PlanServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::PlanNotFound(id),
            RepoError::InvalidPlan(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Plan service facade over repository implementations.
pub struct PlanService<R: PlanRepository> {
    repo: R,
}

impl<R: PlanRepository> PlanService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a pending plan with zero progress.
    pub fn create_plan(
        &self,
        draft: PlanDraft,
        now: NaiveDateTime,
    ) -> Result<StudyPlan, PlanServiceError> {
        let mut plan = StudyPlan::from_draft(draft)?;
        plan.created_at = Some(now.format(CREATED_AT_FORMAT).to_string());
        self.repo.insert_plan(&plan)?;
        info!(
            "event=plan_create module=service status=ok plan_id={}",
            plan.id
        );
        Ok(plan)
    }

    /// Replaces title, subject, description, due date, priority and links.
    pub fn update_details(
        &self,
        id: &str,
        draft: PlanDraft,
    ) -> Result<StudyPlan, PlanServiceError> {
        let mut plan = self.require_plan(id)?;
        plan.apply_draft(draft)?;
        self.repo.update_plan(&plan)?;
        Ok(plan)
    }

    /// Sets progress and the status derived from it.
    ///
    /// # Errors
    /// - `Validation` when `progress > 100`; the stored plan is unchanged.
    pub fn set_progress(&self, id: &str, progress: u8) -> Result<StudyPlan, PlanServiceError> {
        let mut plan = self.require_plan(id)?;
        plan.set_progress(progress)?;
        self.repo.update_plan(&plan)?;
        info!(
            "event=plan_progress module=service status=ok plan_id={} progress={}",
            plan.id,
            plan.progress()
        );
        Ok(plan)
    }

    /// Links or unlinks a note; returns the updated plan.
    pub fn toggle_linked_note(
        &self,
        id: &str,
        note_id: &str,
    ) -> Result<StudyPlan, PlanServiceError> {
        let mut plan = self.require_plan(id)?;
        plan.toggle_linked_note(note_id);
        self.repo.update_plan(&plan)?;
        Ok(plan)
    }

    pub fn delete_plan(&self, id: &str) -> Result<(), PlanServiceError> {
        self.repo.delete_plan(id)?;
        info!("event=plan_delete module=service status=ok plan_id={id}");
        Ok(())
    }

    pub fn get_plan(&self, id: &str) -> Result<Option<StudyPlan>, PlanServiceError> {
        Ok(self.repo.get_plan(id)?)
    }

    /// Lists plans ordered by due date, soonest first.
    pub fn list_plans(&self) -> Result<Vec<StudyPlan>, PlanServiceError> {
        Ok(self.repo.list_plans()?)
    }

    /// Recomputes plan statistics relative to `now`.
    pub fn stats(&self, now: NaiveDateTime) -> Result<PlanStats, PlanServiceError> {
        let plans = self.repo.list_plans()?;
        Ok(aggregate_plans(&plans, now))
    }

    pub fn plans_for_date(&self, date: NaiveDate) -> Result<Vec<StudyPlan>, PlanServiceError> {
        let plans = self.repo.list_plans()?;
        Ok(calendar::plans_for_date(&plans, date)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn dates_with_plans(&self) -> Result<Vec<NaiveDate>, PlanServiceError> {
        let plans = self.repo.list_plans()?;
        Ok(calendar::dates_with_plans(&plans))
    }

    fn require_plan(&self, id: &str) -> Result<StudyPlan, PlanServiceError> {
        self.repo
            .get_plan(id)?
            .ok_or_else(|| PlanServiceError::PlanNotFound(id.to_string()))
    }
}
