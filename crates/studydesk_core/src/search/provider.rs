//! Corpus provider contract and in-memory implementation.

use crate::model::document::LegalDocument;
use crate::search::documents::{
    corpus_stats, filter_documents_by_type, search_documents, CorpusStats,
};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider call that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusOperation {
    ListAll,
    SearchByText,
    FilterByType,
    Stats,
    Import,
}

impl CorpusOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListAll => "list_all",
            Self::SearchByText => "search_by_text",
            Self::FilterByType => "filter_by_type",
            Self::Stats => "stats",
            Self::Import => "import",
        }
    }
}

/// Failure reported by a corpus provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub provider_id: String,
    pub operation: CorpusOperation,
    /// Stable machine-readable code, e.g. `unavailable`.
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(
        provider_id: impl Into<String>,
        operation: CorpusOperation,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            operation,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "provider `{}` failed {} ({}): {}",
            self.provider_id,
            self.operation.as_str(),
            self.code,
            self.message
        )
    }
}

impl Error for ProviderError {}

/// Source of the reference corpus (remote service, local DB, fixture).
///
/// Calls may suspend while the backing store responds.
#[async_trait]
pub trait DocumentCorpusProvider: Send + Sync {
    fn provider_id(&self) -> &str;
    async fn list_all(&self) -> ProviderResult<Vec<LegalDocument>>;
    async fn search_by_text(&self, term: &str) -> ProviderResult<Vec<LegalDocument>>;
    async fn filter_by_type(&self, doc_type: &str) -> ProviderResult<Vec<LegalDocument>>;
    async fn stats(&self) -> ProviderResult<CorpusStats>;
}

/// Provider over a corpus held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentProvider {
    documents: Vec<LegalDocument>,
}

impl InMemoryDocumentProvider {
    pub fn new(documents: Vec<LegalDocument>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl DocumentCorpusProvider for InMemoryDocumentProvider {
    fn provider_id(&self) -> &str {
        "memory"
    }

    async fn list_all(&self) -> ProviderResult<Vec<LegalDocument>> {
        Ok(self.documents.clone())
    }

    async fn search_by_text(&self, term: &str) -> ProviderResult<Vec<LegalDocument>> {
        Ok(search_documents(&self.documents, term)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn filter_by_type(&self, doc_type: &str) -> ProviderResult<Vec<LegalDocument>> {
        Ok(filter_documents_by_type(&self.documents, Some(doc_type))
            .into_iter()
            .cloned()
            .collect())
    }

    async fn stats(&self) -> ProviderResult<CorpusStats> {
        Ok(corpus_stats(&self.documents))
    }
}
