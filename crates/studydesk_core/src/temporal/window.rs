//! Inclusive day windows around a reference instant.

use crate::model::event::Event;
use crate::model::note::Note;
use crate::temporal::parse::parse_instant;
use chrono::{NaiveDateTime, TimeDelta};

/// Inclusive `[lower, upper]` instant range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub lower: NaiveDateTime,
    pub upper: NaiveDateTime,
}

impl DateWindow {
    /// Builds the window `[reference + lower_days, reference + upper_days]`.
    ///
    /// Offsets may be negative. Bounds saturate at the representable range.
    pub fn around(reference: NaiveDateTime, lower_days: i64, upper_days: i64) -> Self {
        Self {
            lower: shift_days(reference, lower_days),
            upper: shift_days(reference, upper_days),
        }
    }

    /// Returns whether `instant` lies inside the window, both ends included.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.lower <= instant && instant <= self.upper
    }
}

/// Selects the records whose date falls inside the window.
///
/// `date_of` returns `None` for records without a usable date; those are
/// dropped. Input order is preserved.
pub fn windowed<'a, T, F>(
    records: &'a [T],
    date_of: F,
    reference: NaiveDateTime,
    lower_offset_days: i64,
    upper_offset_days: i64,
) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<NaiveDateTime>,
{
    let window = DateWindow::around(reference, lower_offset_days, upper_offset_days);
    dated_in_window(records, date_of, window)
        .into_iter()
        .map(|(_, record)| record)
        .collect()
}

/// Events dated in `[reference, reference + days]`, soonest first.
pub fn upcoming_events(events: &[Event], reference: NaiveDateTime, days: i64) -> Vec<&Event> {
    let window = DateWindow::around(reference, 0, days);
    let mut selected = dated_in_window(events, |event| parse_instant(&event.date), window);
    selected.sort_by_key(|(instant, _)| *instant);
    selected.into_iter().map(|(_, event)| event).collect()
}

/// Notes whose effective date is in `[reference - days, reference]`, most
/// recent first.
pub fn recent_notes(notes: &[Note], reference: NaiveDateTime, days: i64) -> Vec<&Note> {
    let window = DateWindow::around(reference, -days, 0);
    let mut selected = dated_in_window(notes, |note| parse_instant(note.effective_date()), window);
    selected.sort_by(|(left, _), (right, _)| right.cmp(left));
    selected.into_iter().map(|(_, note)| note).collect()
}

fn dated_in_window<'a, T, F>(
    records: &'a [T],
    date_of: F,
    window: DateWindow,
) -> Vec<(NaiveDateTime, &'a T)>
where
    F: Fn(&T) -> Option<NaiveDateTime>,
{
    records
        .iter()
        .filter_map(|record| date_of(record).map(|instant| (instant, record)))
        .filter(|(instant, _)| window.contains(*instant))
        .collect()
}

fn shift_days(reference: NaiveDateTime, days: i64) -> NaiveDateTime {
    let shifted = TimeDelta::try_days(days).and_then(|delta| reference.checked_add_signed(delta));
    match shifted {
        Some(instant) => instant,
        None if days < 0 => NaiveDateTime::MIN,
        None => NaiveDateTime::MAX,
    }
}
