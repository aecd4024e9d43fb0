//! Calendar event model.

use serde::{Deserialize, Serialize};

/// Opaque event identifier assigned by the data store.
pub type EventId = String;

/// Calendar entry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Class,
    Exam,
    StudySession,
    Deadline,
    /// Any tag this build does not know about.
    #[serde(other)]
    Other,
}

/// One calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Calendar date, optionally with a time of day.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        date: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            kind,
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Event, EventKind};

    #[test]
    fn unknown_event_type_decodes_as_other() {
        let value = serde_json::json!({
            "id": "e1",
            "title": "Revisão",
            "date": "2024-03-02",
            "type": "workshop"
        });
        let event: Event = serde_json::from_value(value).expect("event should decode");
        assert_eq!(event.kind, EventKind::Other);
    }

    #[test]
    fn study_session_uses_kebab_case_tag() {
        let event = Event::new("e2", "Leitura", "2024-03-02", EventKind::StudySession);
        let json = serde_json::to_value(&event).expect("event should encode");
        assert_eq!(json["type"], "study-session");
        assert!(json.get("description").is_none());
    }
}
