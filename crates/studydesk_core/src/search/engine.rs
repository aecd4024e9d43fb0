//! Document browser orchestration over a corpus provider.
//!
//! # Responsibility
//! - Keep the loaded corpus snapshot that result sizes are measured against.
//! - Short-circuit identity filters locally; delegate real queries.
//! - Emit metadata-only search diagnostics.

use crate::model::document::LegalDocument;
use crate::search::documents::{CorpusStats, ResultSet};
use crate::search::provider::{DocumentCorpusProvider, ProviderError};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The corpus provider could not answer.
    Provider(ProviderError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
        }
    }
}

impl From<ProviderError> for SearchError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}

/// Tagged envelope for UI boundaries: `{"status": "success", ...}` or
/// `{"status": "failure", "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchOutcome {
    Success { result: ResultSet },
    Failure { error: String },
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<SearchResult<ResultSet>> for SearchOutcome {
    fn from(value: SearchResult<ResultSet>) -> Self {
        match value {
            Ok(result) => Self::Success { result },
            Err(err) => Self::Failure {
                error: err.to_string(),
            },
        }
    }
}

/// Search/filter engine for the reference document browser.
pub struct DocumentSearchEngine<P: DocumentCorpusProvider> {
    provider: P,
    corpus: Vec<LegalDocument>,
}

impl<P: DocumentCorpusProvider> DocumentSearchEngine<P> {
    /// Creates an engine with an empty corpus; call [`Self::load`] first.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            corpus: Vec::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Currently loaded corpus.
    pub fn corpus(&self) -> &[LegalDocument] {
        &self.corpus
    }

    /// Loads the full corpus from the provider.
    ///
    /// On failure the previously loaded corpus is kept.
    pub async fn load(&mut self) -> SearchResult<ResultSet> {
        let started_at = Instant::now();
        match self.provider.list_all().await {
            Ok(documents) => {
                self.corpus = documents;
                info!(
                    "event=corpus_load module=search status=ok provider={} total={} duration_ms={}",
                    self.provider.provider_id(),
                    self.corpus.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(ResultSet::full(&self.corpus))
            }
            Err(err) => {
                warn!(
                    "event=corpus_load module=search status=error provider={} error_code={}",
                    self.provider.provider_id(),
                    err.code
                );
                Err(err.into())
            }
        }
    }

    /// Free-text search; a blank query returns the loaded corpus unchanged.
    pub async fn search(&self, query: &str) -> SearchResult<ResultSet> {
        let term = query.trim();
        if term.is_empty() {
            return Ok(ResultSet::full(&self.corpus));
        }

        let started_at = Instant::now();
        let outcome = self.provider.search_by_text(term).await;
        self.finish("document_search", started_at, outcome)
    }

    /// Type-facet filter; `None` or a blank facet returns the loaded corpus.
    pub async fn filter_by_type(&self, doc_type: Option<&str>) -> SearchResult<ResultSet> {
        let facet = match doc_type {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Ok(ResultSet::full(&self.corpus)),
        };

        let started_at = Instant::now();
        let outcome = self.provider.filter_by_type(facet).await;
        self.finish("document_filter", started_at, outcome)
    }

    /// Corpus statistics as reported by the provider.
    pub async fn stats(&self) -> SearchResult<CorpusStats> {
        self.provider.stats().await.map_err(|err| {
            warn!(
                "event=corpus_stats module=search status=error provider={} error_code={}",
                self.provider.provider_id(),
                err.code
            );
            SearchError::from(err)
        })
    }

    fn finish(
        &self,
        event: &str,
        started_at: Instant,
        outcome: Result<Vec<LegalDocument>, ProviderError>,
    ) -> SearchResult<ResultSet> {
        match outcome {
            Ok(documents) => {
                let result = ResultSet::new(documents, self.corpus.len());
                info!(
                    "event={} module=search status=ok provider={} shown={} total={} duration_ms={}",
                    event,
                    self.provider.provider_id(),
                    result.shown,
                    result.total,
                    started_at.elapsed().as_millis()
                );
                Ok(result)
            }
            Err(err) => {
                warn!(
                    "event={} module=search status=error provider={} error_code={} duration_ms={}",
                    event,
                    self.provider.provider_id(),
                    err.code,
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }
}
