//! Support ticket use-case service.
//!
//! # Invariants
//! - Submitted tickets start `open` and are stamped with the caller's time.
//! - A user's ticket list is newest first.

use crate::model::ticket::{
    Requester, SupportTicket, TicketDraft, TicketId, TicketStatus, TicketValidationError,
};
use crate::repo::ticket_repo::{TicketListQuery, TicketRepository};
use crate::repo::RepoError;
use chrono::NaiveDateTime;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum TicketServiceError {
    Validation(TicketValidationError),
    TicketNotFound(TicketId),
    Repo(RepoError),
}

impl Display for TicketServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TicketNotFound(id) => write!(f, "support ticket not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TicketServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::TicketNotFound(_) => None,
        }
    }
}

impl From<TicketValidationError> for TicketServiceError {
    fn from(value: TicketValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for TicketServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::TicketNotFound(id),
            RepoError::InvalidTicket(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Ticket service facade over repository implementations.
pub struct TicketService<R: TicketRepository> {
    repo: R,
}

impl<R: TicketRepository> TicketService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new ticket filed by `requester`.
    pub fn submit(
        &self,
        draft: TicketDraft,
        requester: &Requester,
        now: NaiveDateTime,
    ) -> Result<SupportTicket, TicketServiceError> {
        let ticket = SupportTicket::submit(draft, requester, now)?;
        self.repo.insert_ticket(&ticket)?;
        // Metadata only: subject and message stay out of the logs.
        info!(
            "event=ticket_submit module=service status=ok ticket_id={} kind={:?}",
            ticket.id, ticket.kind
        );
        Ok(ticket)
    }

    /// Lists tickets filed with `email`, newest first.
    pub fn tickets_for_user(&self, email: &str) -> Result<Vec<SupportTicket>, TicketServiceError> {
        let query = TicketListQuery {
            user_email: Some(email.to_string()),
            ..TicketListQuery::default()
        };
        Ok(self.repo.list_tickets(&query)?)
    }

    pub fn get_ticket(&self, id: &str) -> Result<Option<SupportTicket>, TicketServiceError> {
        Ok(self.repo.get_ticket(id)?)
    }

    /// Moves a ticket to `status` and returns the stored ticket.
    pub fn set_status(
        &self,
        id: &str,
        status: TicketStatus,
    ) -> Result<SupportTicket, TicketServiceError> {
        self.repo.set_ticket_status(id, status)?;
        self.repo
            .get_ticket(id)?
            .ok_or_else(|| TicketServiceError::TicketNotFound(id.to_string()))
    }
}
