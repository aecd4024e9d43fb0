//! Legal reference document model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque corpus identifier.
pub type DocumentId = String;

/// One read-only document of the reference corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub id: DocumentId,
    pub title: String,
    /// Category facet (`lei`, `decreto`, `portaria`, ...).
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl LegalDocument {
    pub fn new(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        doc_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            doc_type: doc_type.into(),
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }
}
