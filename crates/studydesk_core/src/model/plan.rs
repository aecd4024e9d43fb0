//! Study plan model.
//!
//! # Responsibility
//! - Define the plan record tracked by the planning view.
//! - Own the single update path for progress and status.
//!
//! # Invariants
//! - `status == Done` iff `progress == 100` for every plan changed through
//!   [`StudyPlan::set_progress`].
//! - Detail edits never touch progress or status.
//! - `due_date` is a strict `YYYY-MM-DD` string on validated plans.

use crate::model::note::NoteId;
use crate::temporal::parse::parse_due_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque plan identifier.
pub type PlanId = String;

/// Upper bound of plan progress.
pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Plan lifecycle state, always derived from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl PlanStatus {
    /// Status implied by a progress value.
    ///
    /// `100` is done, anything above zero is in progress, zero is pending.
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            PROGRESS_COMPLETE.. => Self::Done,
            1.. => Self::InProgress,
            0 => Self::Pending,
        }
    }
}

/// Validation failure for plan details or progress updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanValidationError {
    EmptyTitle,
    EmptySubject,
    InvalidDueDate(String),
    ProgressOutOfRange(u8),
}

impl Display for PlanValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "plan title cannot be empty"),
            Self::EmptySubject => write!(f, "plan subject cannot be empty"),
            Self::InvalidDueDate(value) => {
                write!(f, "plan due date `{value}` is not a YYYY-MM-DD date")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "plan progress {value} is outside 0..=100")
            }
        }
    }
}

impl Error for PlanValidationError {}

/// User-editable plan details.
///
/// Progress and status are deliberately absent: they only move through
/// [`StudyPlan::set_progress`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    pub title: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub linked_notes: BTreeSet<NoteId>,
}

impl PlanDraft {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            due_date: due_date.into(),
            ..Self::default()
        }
    }

    /// Checks required fields.
    ///
    /// # Errors
    /// - Blank title or subject.
    /// - Due date that is not a strict `YYYY-MM-DD` calendar date.
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.title.trim().is_empty() {
            return Err(PlanValidationError::EmptyTitle);
        }
        if self.subject.trim().is_empty() {
            return Err(PlanValidationError::EmptySubject);
        }
        if parse_due_date(&self.due_date).is_none() {
            return Err(PlanValidationError::InvalidDueDate(self.due_date.clone()));
        }
        Ok(())
    }
}

/// Study plan tracked by the planning view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub id: PlanId,
    pub title: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    status: PlanStatus,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    pub linked_notes: BTreeSet<NoteId>,
    /// Creation date stamped by the store.
    #[serde(default, rename = "date", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl StudyPlan {
    /// Creates a pending plan with a generated id.
    pub fn from_draft(draft: PlanDraft) -> Result<Self, PlanValidationError> {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Creates a pending plan with a caller-provided id.
    pub fn with_id(id: impl Into<PlanId>, draft: PlanDraft) -> Result<Self, PlanValidationError> {
        draft.validate()?;
        Ok(Self {
            id: id.into(),
            title: draft.title,
            subject: draft.subject,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            status: PlanStatus::Pending,
            progress: 0,
            linked_notes: draft.linked_notes,
            created_at: None,
        })
    }

    /// Rebuilds a plan from stored columns.
    ///
    /// Used by repository read paths, which check consistency themselves.
    pub(crate) fn from_stored(
        id: PlanId,
        draft: PlanDraft,
        status: PlanStatus,
        progress: u8,
        created_at: Option<String>,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            subject: draft.subject,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            status,
            progress,
            linked_notes: draft.linked_notes,
            created_at,
        }
    }

    pub fn status(&self) -> PlanStatus {
        self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_done(&self) -> bool {
        self.status == PlanStatus::Done
    }

    /// Parsed due date, `None` when the stored value is malformed.
    pub fn due_on(&self) -> Option<NaiveDate> {
        parse_due_date(&self.due_date)
    }

    /// Returns whether status agrees with progress.
    ///
    /// Plans decoded from external snapshots may drift; plans changed through
    /// this type never do.
    pub fn is_consistent(&self) -> bool {
        self.progress <= PROGRESS_COMPLETE && self.status == PlanStatus::for_progress(self.progress)
    }

    /// Sets progress and recomputes status from it.
    pub fn set_progress(&mut self, progress: u8) -> Result<(), PlanValidationError> {
        if progress > PROGRESS_COMPLETE {
            return Err(PlanValidationError::ProgressOutOfRange(progress));
        }
        self.progress = progress;
        self.status = PlanStatus::for_progress(progress);
        Ok(())
    }

    /// Replaces user-editable details, keeping progress and status.
    pub fn apply_draft(&mut self, draft: PlanDraft) -> Result<(), PlanValidationError> {
        draft.validate()?;
        self.title = draft.title;
        self.subject = draft.subject;
        self.description = draft.description;
        self.due_date = draft.due_date;
        self.priority = draft.priority;
        self.linked_notes = draft.linked_notes;
        Ok(())
    }

    /// Current details as an editable draft.
    pub fn draft(&self) -> PlanDraft {
        PlanDraft {
            title: self.title.clone(),
            subject: self.subject.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            priority: self.priority,
            linked_notes: self.linked_notes.clone(),
        }
    }

    /// Links `note_id` if absent, unlinks it otherwise.
    ///
    /// Returns `true` when the note is linked after the call.
    pub fn toggle_linked_note(&mut self, note_id: &str) -> bool {
        if self.linked_notes.remove(note_id) {
            return false;
        }
        self.linked_notes.insert(note_id.to_string());
        true
    }
}
