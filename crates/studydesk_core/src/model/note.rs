//! Notebook entry model.

use serde::{Deserialize, Serialize};

/// Opaque note identifier assigned by the data store.
pub type NoteId = String;

/// One notebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub subject: String,
    #[serde(default)]
    pub content: String,
    /// Creation date.
    pub date: String,
    /// Last edit date; absent for never-edited notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Note {
    pub fn new(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        subject: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subject: subject.into(),
            content: String::new(),
            date: date.into(),
            last_modified: None,
        }
    }

    /// Date used for recency ordering.
    ///
    /// `last_modified` wins when present and non-blank, otherwise `date`.
    pub fn effective_date(&self) -> &str {
        match self.last_modified.as_deref() {
            Some(value) if !value.trim().is_empty() => value,
            _ => self.date.as_str(),
        }
    }
}
