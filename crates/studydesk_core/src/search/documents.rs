//! Pure filters and result shaping over an in-hand corpus.

use crate::model::document::LegalDocument;
use serde::Serialize;
use std::collections::BTreeMap;

/// Documents matched by one search or filter, measured against the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub documents: Vec<LegalDocument>,
    /// Number of matched documents (K).
    pub shown: usize,
    /// Size of the loaded corpus (N).
    pub total: usize,
    /// `true` only when strictly fewer documents than the corpus matched.
    pub is_subset: bool,
}

impl ResultSet {
    /// Measures `documents` against a corpus of `total` documents.
    ///
    /// `total` is raised to `shown` when smaller, so a result never reads
    /// "K of N" with K > N. That happens when a provider answers before the
    /// engine has loaded its corpus.
    pub fn new(documents: Vec<LegalDocument>, total: usize) -> Self {
        let shown = documents.len();
        let total = total.max(shown);
        Self {
            documents,
            shown,
            total,
            is_subset: shown < total,
        }
    }

    /// Whole-corpus result, used by identity filters.
    pub fn full(corpus: &[LegalDocument]) -> Self {
        Self::new(corpus.to_vec(), corpus.len())
    }

    /// `"showing K of N"`, or `None` when every document is shown.
    pub fn summary_label(&self) -> Option<String> {
        if !self.is_subset {
            return None;
        }
        Some(format!("showing {} of {}", self.shown, self.total))
    }
}

/// Corpus size and per-type document counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
}

/// Case-insensitive substring search over `title` and `content`.
///
/// A blank query returns every document in corpus order.
pub fn search_documents<'a>(corpus: &'a [LegalDocument], query: &str) -> Vec<&'a LegalDocument> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return corpus.iter().collect();
    }

    corpus
        .iter()
        .filter(|document| matches_text(document, &needle))
        .collect()
}

/// Exact-match filter on the `type` facet.
///
/// `None` or a blank facet returns every document in corpus order.
pub fn filter_documents_by_type<'a>(
    corpus: &'a [LegalDocument],
    doc_type: Option<&str>,
) -> Vec<&'a LegalDocument> {
    match doc_type {
        Some(facet) if !facet.trim().is_empty() => corpus
            .iter()
            .filter(|document| document.doc_type == facet)
            .collect(),
        _ => corpus.iter().collect(),
    }
}

/// Counts documents overall and per `type`.
pub fn corpus_stats(corpus: &[LegalDocument]) -> CorpusStats {
    let mut by_type = BTreeMap::new();
    for document in corpus {
        *by_type.entry(document.doc_type.clone()).or_insert(0) += 1;
    }
    CorpusStats {
        total: corpus.len(),
        by_type,
    }
}

fn matches_text(document: &LegalDocument, needle_lowercase: &str) -> bool {
    document.title.to_lowercase().contains(needle_lowercase)
        || document.content.to_lowercase().contains(needle_lowercase)
}
