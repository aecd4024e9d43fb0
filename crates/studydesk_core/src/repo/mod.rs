//! Repository contracts and SQLite persistence for tracked records.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for plans and tickets.
//! - Keep SQL details out of services.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Missing rows surface as `NotFound`, not as DB errors.

use crate::db::DbError;
use crate::model::plan::PlanValidationError;
use crate::model::ticket::TicketValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod plan_repo;
pub mod ticket_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    InvalidPlan(PlanValidationError),
    InvalidTicket(TicketValidationError),
    Db(DbError),
    NotFound { entity: &'static str, id: String },
    InvalidData(String),
}

impl RepoError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlan(err) => write!(f, "{err}"),
            Self::InvalidTicket(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPlan(err) => Some(err),
            Self::InvalidTicket(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<PlanValidationError> for RepoError {
    fn from(value: PlanValidationError) -> Self {
        Self::InvalidPlan(value)
    }
}

impl From<TicketValidationError> for RepoError {
    fn from(value: TicketValidationError) -> Self {
        Self::InvalidTicket(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
