//! SQLite-backed corpus provider.
//!
//! # Invariants
//! - Documents are returned in import order (`rowid`).
//! - Metadata is stored as a JSON object of strings.
//! - The connection lock is never held across an await point.

use crate::model::document::LegalDocument;
use crate::search::documents::{search_documents, CorpusStats};
use crate::search::provider::{
    CorpusOperation, DocumentCorpusProvider, ProviderError, ProviderResult,
};
use async_trait::async_trait;
use log::{info, warn};
use rusqlite::{params, Connection, Row};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

const PROVIDER_ID: &str = "sqlite";
const DOCUMENT_SELECT_SQL: &str = "SELECT id, title, doc_type, content, metadata
FROM legal_documents";

/// Corpus provider reading the `legal_documents` table.
pub struct SqliteDocumentProvider {
    conn: Mutex<Connection>,
}

impl SqliteDocumentProvider {
    /// Wraps a migrated connection (see [`crate::db::open_db`]).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Inserts or replaces documents by id.
    ///
    /// Returns the number of imported documents.
    pub fn import_documents(&self, documents: &[LegalDocument]) -> ProviderResult<usize> {
        let op = CorpusOperation::Import;
        let mut conn = self.lock(op)?;
        let tx = conn.transaction().map_err(|err| storage_error(op, err))?;
        for document in documents {
            let metadata = serde_json::to_string(&document.metadata).map_err(|err| {
                ProviderError::new(PROVIDER_ID, op, "invalid_metadata", err.to_string())
            })?;
            tx.execute(
                "INSERT INTO legal_documents (id, title, doc_type, content, metadata)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    doc_type = excluded.doc_type,
                    content = excluded.content,
                    metadata = excluded.metadata;",
                params![
                    document.id.as_str(),
                    document.title.as_str(),
                    document.doc_type.as_str(),
                    document.content.as_str(),
                    metadata,
                ],
            )
            .map_err(|err| storage_error(op, err))?;
        }
        tx.commit().map_err(|err| storage_error(op, err))?;

        info!(
            "event=corpus_import module=search status=ok provider={} count={}",
            PROVIDER_ID,
            documents.len()
        );
        Ok(documents.len())
    }

    fn lock(&self, op: CorpusOperation) -> ProviderResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            warn!(
                "event=corpus_lock module=search status=error provider={} op={}",
                PROVIDER_ID,
                op.as_str()
            );
            ProviderError::new(PROVIDER_ID, op, "lock_poisoned", "connection lock poisoned")
        })
    }

    fn query_documents(
        &self,
        op: CorpusOperation,
        filter_sql: &str,
        bind: Option<&str>,
    ) -> ProviderResult<Vec<LegalDocument>> {
        let conn = self.lock(op)?;
        let sql = format!("{DOCUMENT_SELECT_SQL}{filter_sql} ORDER BY rowid ASC;");
        let mut stmt = conn.prepare(&sql).map_err(|err| storage_error(op, err))?;
        let mut rows = match bind {
            Some(value) => stmt.query([value]),
            None => stmt.query([]),
        }
        .map_err(|err| storage_error(op, err))?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().map_err(|err| storage_error(op, err))? {
            documents.push(parse_document_row(row, op)?);
        }
        Ok(documents)
    }
}

#[async_trait]
impl DocumentCorpusProvider for SqliteDocumentProvider {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn list_all(&self) -> ProviderResult<Vec<LegalDocument>> {
        self.query_documents(CorpusOperation::ListAll, "", None)
    }

    async fn search_by_text(&self, term: &str) -> ProviderResult<Vec<LegalDocument>> {
        // SQLite `lower()`/`LIKE` only fold ASCII; accented titles need Rust-side folding.
        let all = self.query_documents(CorpusOperation::SearchByText, "", None)?;
        Ok(search_documents(&all, term).into_iter().cloned().collect())
    }

    async fn filter_by_type(&self, doc_type: &str) -> ProviderResult<Vec<LegalDocument>> {
        self.query_documents(
            CorpusOperation::FilterByType,
            " WHERE doc_type = ?1",
            Some(doc_type),
        )
    }

    async fn stats(&self) -> ProviderResult<CorpusStats> {
        let op = CorpusOperation::Stats;
        let conn = self.lock(op)?;
        let mut stmt = conn
            .prepare(
                "SELECT doc_type, COUNT(*) AS count
                 FROM legal_documents
                 GROUP BY doc_type
                 ORDER BY doc_type ASC;",
            )
            .map_err(|err| storage_error(op, err))?;
        let mut rows = stmt.query([]).map_err(|err| storage_error(op, err))?;

        let mut stats = CorpusStats::default();
        while let Some(row) = rows.next().map_err(|err| storage_error(op, err))? {
            let doc_type: String = row.get("doc_type").map_err(|err| storage_error(op, err))?;
            let count: i64 = row.get("count").map_err(|err| storage_error(op, err))?;
            let count = usize::try_from(count).map_err(|_| {
                ProviderError::new(PROVIDER_ID, op, "invalid_data", "negative count")
            })?;
            stats.total += count;
            stats.by_type.insert(doc_type, count);
        }
        Ok(stats)
    }
}

fn parse_document_row(row: &Row<'_>, op: CorpusOperation) -> ProviderResult<LegalDocument> {
    let metadata_text: Option<String> = row.get("metadata").map_err(|err| storage_error(op, err))?;
    let metadata = match metadata_text.as_deref() {
        None | Some("") => BTreeMap::new(),
        Some(text) => serde_json::from_str::<BTreeMap<String, String>>(text).map_err(|err| {
            ProviderError::new(
                PROVIDER_ID,
                op,
                "invalid_data",
                format!("invalid metadata json in legal_documents.metadata: {err}"),
            )
        })?,
    };

    Ok(LegalDocument {
        id: row.get("id").map_err(|err| storage_error(op, err))?,
        title: row.get("title").map_err(|err| storage_error(op, err))?,
        doc_type: row.get("doc_type").map_err(|err| storage_error(op, err))?,
        content: row.get("content").map_err(|err| storage_error(op, err))?,
        metadata,
    })
}

fn storage_error(op: CorpusOperation, err: rusqlite::Error) -> ProviderError {
    ProviderError::new(PROVIDER_ID, op, "storage", err.to_string())
}
