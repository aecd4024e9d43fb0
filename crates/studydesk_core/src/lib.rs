//! Core domain logic for StudyDesk.
//! This crate is the single source of truth for derived study state.

pub mod activity;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod stats;
pub mod temporal;

pub use activity::{merge_recent, recent_activity, ActivityItem, ActivityKind};
pub use config::{ConfigError, CoreConfig};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::document::LegalDocument;
pub use model::event::{Event, EventKind};
pub use model::note::{Note, NoteId};
pub use model::plan::{
    PlanDraft, PlanId, PlanStatus, PlanValidationError, Priority, StudyPlan, PROGRESS_COMPLETE,
};
pub use model::test_result::TestResult;
pub use model::ticket::{
    Requester, SupportTicket, TicketDraft, TicketId, TicketKind, TicketStatus,
    TicketValidationError,
};
pub use repo::plan_repo::{PlanRepository, SqlitePlanRepository};
pub use repo::ticket_repo::{SqliteTicketRepository, TicketListQuery, TicketRepository};
pub use repo::{RepoError, RepoResult};
pub use search::{
    CorpusStats, DocumentCorpusProvider, DocumentSearchEngine, InMemoryDocumentProvider,
    ProviderError, ResultSet, SearchError, SearchOutcome, SearchResult, SqliteDocumentProvider,
};
pub use service::dashboard::{build_dashboard, build_profile, DashboardSummary, StudySnapshot};
pub use service::plan_service::{PlanService, PlanServiceError};
pub use service::ticket_service::{TicketService, TicketServiceError};
pub use stats::{aggregate_plans, MonthlyGoals, PlanStats, ProfileStats};
pub use temporal::{Clock, FixedClock, SystemClock};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
