//! Study plan repository contract and SQLite implementation.
//!
//! # Invariants
//! - Writes require a valid draft and a status consistent with progress.
//! - Reads reject rows whose status drifted from their progress.
//! - Lists are ordered by `due_date ASC, id ASC`.

use crate::model::plan::{PlanDraft, PlanId, PlanStatus, Priority, StudyPlan};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use std::collections::BTreeSet;

const PLAN_ENTITY: &str = "study plan";
const PLAN_SELECT_SQL: &str = "SELECT
    id,
    title,
    subject,
    description,
    due_date,
    priority,
    status,
    progress,
    linked_notes,
    created_at
FROM study_plans";

/// Repository interface for study plan persistence.
pub trait PlanRepository {
    fn insert_plan(&self, plan: &StudyPlan) -> RepoResult<()>;
    /// Full replacement of an existing plan row.
    fn update_plan(&self, plan: &StudyPlan) -> RepoResult<()>;
    fn get_plan(&self, id: &str) -> RepoResult<Option<StudyPlan>>;
    fn list_plans(&self) -> RepoResult<Vec<StudyPlan>>;
    fn delete_plan(&self, id: &str) -> RepoResult<()>;
}

/// SQLite-backed study plan repository.
pub struct SqlitePlanRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePlanRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PlanRepository for SqlitePlanRepository<'_> {
    fn insert_plan(&self, plan: &StudyPlan) -> RepoResult<()> {
        check_writable(plan)?;

        self.conn.execute(
            "INSERT INTO study_plans (
                id,
                title,
                subject,
                description,
                due_date,
                priority,
                status,
                progress,
                linked_notes,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                plan.id.as_str(),
                plan.title.as_str(),
                plan.subject.as_str(),
                plan.description.as_deref(),
                plan.due_date.as_str(),
                priority_to_db(plan.priority),
                status_to_db(plan.status()),
                i64::from(plan.progress()),
                encode_linked_notes(&plan.linked_notes)?,
                plan.created_at.as_deref(),
            ],
        )?;
        Ok(())
    }

    fn update_plan(&self, plan: &StudyPlan) -> RepoResult<()> {
        check_writable(plan)?;

        let changed = self.conn.execute(
            "UPDATE study_plans
             SET
                title = ?1,
                subject = ?2,
                description = ?3,
                due_date = ?4,
                priority = ?5,
                status = ?6,
                progress = ?7,
                linked_notes = ?8,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?9;",
            params![
                plan.title.as_str(),
                plan.subject.as_str(),
                plan.description.as_deref(),
                plan.due_date.as_str(),
                priority_to_db(plan.priority),
                status_to_db(plan.status()),
                i64::from(plan.progress()),
                encode_linked_notes(&plan.linked_notes)?,
                plan.id.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::not_found(PLAN_ENTITY, &plan.id));
        }
        Ok(())
    }

    fn get_plan(&self, id: &str) -> RepoResult<Option<StudyPlan>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLAN_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_plan_row(row)?));
        }
        Ok(None)
    }

    fn list_plans(&self) -> RepoResult<Vec<StudyPlan>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLAN_SELECT_SQL} ORDER BY due_date ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut plans = Vec::new();
        while let Some(row) = rows.next()? {
            plans.push(parse_plan_row(row)?);
        }
        Ok(plans)
    }

    fn delete_plan(&self, id: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM study_plans WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found(PLAN_ENTITY, id));
        }
        Ok(())
    }
}

fn check_writable(plan: &StudyPlan) -> RepoResult<()> {
    plan.draft().validate()?;
    if !plan.is_consistent() {
        return Err(RepoError::InvalidData(format!(
            "plan `{}` status {:?} does not match progress {}",
            plan.id,
            plan.status(),
            plan.progress()
        )));
    }
    Ok(())
}

fn parse_plan_row(row: &Row<'_>) -> RepoResult<StudyPlan> {
    let id: PlanId = row.get("id")?;

    let priority_text: String = row.get("priority")?;
    let priority = parse_priority(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in study_plans.priority"
        ))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in study_plans.status"))
    })?;

    let progress_raw: i64 = row.get("progress")?;
    let progress = u8::try_from(progress_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid progress `{progress_raw}` in study_plans.progress"
        ))
    })?;

    let linked_text: String = row.get("linked_notes")?;
    let linked_notes = serde_json::from_str::<BTreeSet<String>>(&linked_text).map_err(|err| {
        RepoError::InvalidData(format!("invalid json in study_plans.linked_notes: {err}"))
    })?;

    let draft = PlanDraft {
        title: row.get("title")?,
        subject: row.get("subject")?,
        description: row.get("description")?,
        due_date: row.get("due_date")?,
        priority,
        linked_notes,
    };
    let plan = StudyPlan::from_stored(id, draft, status, progress, row.get("created_at")?);
    if !plan.is_consistent() {
        return Err(RepoError::InvalidData(format!(
            "plan `{}` has status `{status_text}` with progress {progress}",
            plan.id
        )));
    }
    Ok(plan)
}

fn encode_linked_notes(linked_notes: &BTreeSet<String>) -> RepoResult<String> {
    serde_json::to_string(linked_notes)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode linked notes: {err}")))
}

fn priority_to_db(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value {
        "low" => Some(Priority::Low),
        "medium" => Some(Priority::Medium),
        "high" => Some(Priority::High),
        _ => None,
    }
}

fn status_to_db(status: PlanStatus) -> &'static str {
    match status {
        PlanStatus::Pending => "pending",
        PlanStatus::InProgress => "in-progress",
        PlanStatus::Done => "done",
    }
}

fn parse_status(value: &str) -> Option<PlanStatus> {
    match value {
        "pending" => Some(PlanStatus::Pending),
        "in-progress" => Some(PlanStatus::InProgress),
        "done" => Some(PlanStatus::Done),
        _ => None,
    }
}
