//! Reference-document search and facet filtering.
//!
//! # Responsibility
//! - Provide pure identity-aware filters over a loaded corpus.
//! - Orchestrate an asynchronous corpus provider for the document browser.
//! - Report result-set size against the loaded corpus ("showing K of N").
//!
//! # Invariants
//! - A blank query or blank type facet returns the whole corpus, in order.
//! - Text search is a case-insensitive substring match on `title` and
//!   `content`.
//! - Type filtering is exact equality on the `type` facet.
//! - Provider failures surface as error values; nothing is retried.

pub mod documents;
pub mod engine;
pub mod provider;
pub mod sqlite_provider;

pub use documents::{
    corpus_stats, filter_documents_by_type, search_documents, CorpusStats, ResultSet,
};
pub use engine::{DocumentSearchEngine, SearchError, SearchOutcome, SearchResult};
pub use provider::{
    CorpusOperation, DocumentCorpusProvider, InMemoryDocumentProvider, ProviderError,
    ProviderResult,
};
pub use sqlite_provider::SqliteDocumentProvider;
