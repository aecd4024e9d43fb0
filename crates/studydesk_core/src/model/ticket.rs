//! Support ticket model.
//!
//! # Invariants
//! - New tickets start `open` and carry the submission instant.
//! - Subject and message are non-blank; requester email has an address shape.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Opaque ticket identifier.
pub type TicketId = String;

const TICKET_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketKind {
    #[default]
    Question,
    Bug,
    Suggestion,
    Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketValidationError {
    EmptySubject,
    EmptyMessage,
    InvalidEmail(String),
}

impl Display for TicketValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySubject => write!(f, "ticket subject cannot be empty"),
            Self::EmptyMessage => write!(f, "ticket message cannot be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid requester email `{value}`"),
        }
    }
}

impl Error for TicketValidationError {}

/// What the user typed into the support form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketDraft {
    pub kind: TicketKind,
    pub subject: String,
    pub message: String,
}

/// Authenticated user filing the ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: TicketId,
    #[serde(rename = "type")]
    pub kind: TicketKind,
    pub subject: String,
    pub message: String,
    pub user_email: String,
    pub user_name: String,
    pub date: String,
    #[serde(default)]
    pub status: TicketStatus,
}

impl SupportTicket {
    /// Builds a new open ticket stamped with `submitted_at`.
    ///
    /// `submitted_at` is local wall time, the base every derivation here uses.
    pub fn submit(
        draft: TicketDraft,
        requester: &Requester,
        submitted_at: NaiveDateTime,
    ) -> Result<Self, TicketValidationError> {
        let ticket = Self {
            id: Uuid::new_v4().to_string(),
            kind: draft.kind,
            subject: draft.subject.trim().to_string(),
            message: draft.message.trim().to_string(),
            user_email: requester.email.trim().to_string(),
            user_name: requester.name.trim().to_string(),
            date: submitted_at.format(TICKET_DATE_FORMAT).to_string(),
            status: TicketStatus::Open,
        };
        ticket.validate()?;
        Ok(ticket)
    }

    pub fn validate(&self) -> Result<(), TicketValidationError> {
        if self.subject.trim().is_empty() {
            return Err(TicketValidationError::EmptySubject);
        }
        if self.message.trim().is_empty() {
            return Err(TicketValidationError::EmptyMessage);
        }
        if !EMAIL_RE.is_match(self.user_email.trim()) {
            return Err(TicketValidationError::InvalidEmail(self.user_email.clone()));
        }
        Ok(())
    }
}
