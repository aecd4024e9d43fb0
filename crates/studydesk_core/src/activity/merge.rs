//! Merge primitive and the event/note activity feed built on it.

use crate::model::event::Event;
use crate::model::note::Note;
use crate::temporal::parse::parse_instant;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Event,
    Note,
}

/// One row of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: NaiveDateTime,
}

/// Concatenates `first` then `second`, orders by `key` descending and keeps
/// at most `limit` items.
///
/// The sort is stable, so on equal keys every item of `first` precedes every
/// item of `second`, and each side keeps its own relative order.
pub fn merge_recent<T, K, F>(first: Vec<T>, second: Vec<T>, key: F, limit: usize) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = first;
    merged.extend(second);
    merged.sort_by(|left, right| key(right).cmp(&key(left)));
    merged.truncate(limit);
    merged
}

/// Builds the dashboard feed from already-windowed events and notes.
///
/// Takes the first `per_source` items of each slice, tags them, merges them
/// newest first and caps the result at `max_items`. Items whose date cannot
/// be parsed are skipped. Empty inputs give an empty feed.
pub fn recent_activity(
    events: &[&Event],
    notes: &[&Note],
    per_source: usize,
    max_items: usize,
) -> Vec<ActivityItem> {
    let event_items = events
        .iter()
        .take(per_source)
        .filter_map(|event| event_activity(event))
        .collect::<Vec<_>>();
    let note_items = notes
        .iter()
        .take(per_source)
        .filter_map(|note| note_activity(note))
        .collect::<Vec<_>>();

    merge_recent(event_items, note_items, |item| item.timestamp, max_items)
}

fn event_activity(event: &Event) -> Option<ActivityItem> {
    let timestamp = parse_instant(&event.date)?;
    Some(ActivityItem {
        kind: ActivityKind::Event,
        title: event.title.clone(),
        description: format!("Event scheduled for {}", timestamp.format("%Y-%m-%d")),
        timestamp,
    })
}

fn note_activity(note: &Note) -> Option<ActivityItem> {
    let timestamp = parse_instant(note.effective_date())?;
    Some(ActivityItem {
        kind: ActivityKind::Note,
        title: note.title.clone(),
        description: format!("Note in {}", note.subject),
        timestamp,
    })
}
