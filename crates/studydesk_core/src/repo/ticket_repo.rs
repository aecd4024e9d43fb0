//! Support ticket repository contract and SQLite implementation.
//!
//! # Invariants
//! - Inserts require a valid ticket.
//! - Lists are ordered by `date DESC, id ASC`.

use crate::model::ticket::{SupportTicket, TicketKind, TicketStatus};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TICKET_ENTITY: &str = "support ticket";
const TICKET_SELECT_SQL: &str = "SELECT
    id,
    type,
    subject,
    message,
    user_email,
    user_name,
    date,
    status
FROM support_tickets";

/// Query options for listing tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketListQuery {
    /// Case-insensitive requester email filter.
    pub user_email: Option<String>,
    pub status: Option<TicketStatus>,
}

/// Repository interface for support tickets.
pub trait TicketRepository {
    fn insert_ticket(&self, ticket: &SupportTicket) -> RepoResult<()>;
    fn get_ticket(&self, id: &str) -> RepoResult<Option<SupportTicket>>;
    fn list_tickets(&self, query: &TicketListQuery) -> RepoResult<Vec<SupportTicket>>;
    fn set_ticket_status(&self, id: &str, status: TicketStatus) -> RepoResult<()>;
}

/// SQLite-backed ticket repository.
pub struct SqliteTicketRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTicketRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TicketRepository for SqliteTicketRepository<'_> {
    fn insert_ticket(&self, ticket: &SupportTicket) -> RepoResult<()> {
        ticket.validate()?;

        self.conn.execute(
            "INSERT INTO support_tickets (
                id,
                type,
                subject,
                message,
                user_email,
                user_name,
                date,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                ticket.id.as_str(),
                kind_to_db(ticket.kind),
                ticket.subject.as_str(),
                ticket.message.as_str(),
                ticket.user_email.as_str(),
                ticket.user_name.as_str(),
                ticket.date.as_str(),
                status_to_db(ticket.status),
            ],
        )?;
        Ok(())
    }

    fn get_ticket(&self, id: &str) -> RepoResult<Option<SupportTicket>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TICKET_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_ticket_row(row)?));
        }
        Ok(None)
    }

    fn list_tickets(&self, query: &TicketListQuery) -> RepoResult<Vec<SupportTicket>> {
        let mut sql = format!("{TICKET_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(email) = query.user_email.as_ref() {
            sql.push_str(" AND user_email = ? COLLATE NOCASE");
            bind_values.push(Value::Text(email.trim().to_string()));
        }
        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status_to_db(status).to_string()));
        }
        sql.push_str(" ORDER BY date DESC, id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tickets = Vec::new();
        while let Some(row) = rows.next()? {
            tickets.push(parse_ticket_row(row)?);
        }
        Ok(tickets)
    }

    fn set_ticket_status(&self, id: &str, status: TicketStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE support_tickets SET status = ?1 WHERE id = ?2;",
            params![status_to_db(status), id],
        )?;
        if changed == 0 {
            return Err(RepoError::not_found(TICKET_ENTITY, id));
        }
        Ok(())
    }
}

fn parse_ticket_row(row: &Row<'_>) -> RepoResult<SupportTicket> {
    let kind_text: String = row.get("type")?;
    let kind = parse_kind(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid ticket type `{kind_text}` in support_tickets.type"))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid ticket status `{status_text}` in support_tickets.status"
        ))
    })?;

    Ok(SupportTicket {
        id: row.get("id")?,
        kind,
        subject: row.get("subject")?,
        message: row.get("message")?,
        user_email: row.get("user_email")?,
        user_name: row.get("user_name")?,
        date: row.get("date")?,
        status,
    })
}

fn kind_to_db(kind: TicketKind) -> &'static str {
    match kind {
        TicketKind::Question => "question",
        TicketKind::Bug => "bug",
        TicketKind::Suggestion => "suggestion",
        TicketKind::Feedback => "feedback",
    }
}

fn parse_kind(value: &str) -> Option<TicketKind> {
    match value {
        "question" => Some(TicketKind::Question),
        "bug" => Some(TicketKind::Bug),
        "suggestion" => Some(TicketKind::Suggestion),
        "feedback" => Some(TicketKind::Feedback),
        _ => None,
    }
}

fn status_to_db(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "open",
        TicketStatus::InProgress => "in-progress",
        TicketStatus::Resolved => "resolved",
    }
}

fn parse_status(value: &str) -> Option<TicketStatus> {
    match value {
        "open" => Some(TicketStatus::Open),
        "in-progress" => Some(TicketStatus::InProgress),
        "resolved" => Some(TicketStatus::Resolved),
        _ => None,
    }
}
