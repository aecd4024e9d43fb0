use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use studydesk_core::temporal::{
    parse_instant, parse_instant_in, recent_notes, upcoming_events, windowed,
};
use studydesk_core::{Clock, SystemClock};
use studydesk_core::{Event, EventKind, Note};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn event(id: &str, date: &str) -> Event {
    Event::new(id, format!("event {id}"), date, EventKind::Class)
}

#[test]
fn windowed_keeps_exactly_the_records_inside_inclusive_bounds() {
    let now = at(2024, 3, 10, 12, 0);
    let records = vec![
        "2024-03-03T12:00:00",
        "2024-03-03T11:59:59",
        "2024-03-10T12:00:00",
        "2024-03-17T12:00:00",
        "2024-03-17T12:00:01",
        "not a date",
    ];

    let selected = windowed(&records, |raw| parse_instant(raw), now, -7, 7);
    assert_eq!(
        selected,
        vec![
            &"2024-03-03T12:00:00",
            &"2024-03-10T12:00:00",
            &"2024-03-17T12:00:00"
        ]
    );
}

#[test]
fn windowed_over_empty_collection_is_empty() {
    let records: Vec<String> = Vec::new();
    let selected = windowed(&records, |raw| parse_instant(raw), at(2024, 1, 1, 0, 0), -7, 7);
    assert!(selected.is_empty());
}

#[test]
fn upcoming_events_are_sorted_soonest_first_and_skip_bad_dates() {
    let now = at(2024, 3, 10, 8, 0);
    let events = vec![
        event("late", "2024-03-16"),
        event("past", "2024-03-09"),
        event("soon", "2024-03-10T09:00"),
        event("broken", "10/03/2024"),
        event("far", "2024-03-30"),
    ];

    let ids = upcoming_events(&events, now, 7)
        .into_iter()
        .map(|event| event.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["soon", "late"]);
}

#[test]
fn recent_notes_use_last_modified_and_sort_newest_first() {
    let now = at(2024, 3, 10, 18, 0);
    let mut edited = Note::new("edited", "Penal", "Direito Penal", "2024-01-01");
    edited.last_modified = Some("2024-03-09T10:00:00".to_string());
    let fresh = Note::new("fresh", "Civil", "Direito Civil", "2024-03-10");
    let stale = Note::new("stale", "Trabalho", "Direito do Trabalho", "2024-02-01");
    let mut blank_edit = Note::new("blank", "Tributário", "Direito Tributário", "2024-03-05");
    blank_edit.last_modified = Some("  ".to_string());

    let notes = vec![edited, fresh, stale, blank_edit];
    let ids = recent_notes(&notes, now, 7)
        .into_iter()
        .map(|note| note.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["fresh", "edited", "blank"]);
}

#[test]
fn record_at_reference_instant_is_both_upcoming_and_recent() {
    let now = at(2024, 3, 10, 0, 0);
    let events = vec![event("today", "2024-03-10")];
    let notes = vec![Note::new("today", "Hoje", "Geral", "2024-03-10")];

    assert_eq!(upcoming_events(&events, now, 7).len(), 1);
    assert_eq!(recent_notes(&notes, now, 7).len(), 1);
}

#[test]
fn utc_stamp_of_a_west_zone_evening_lands_on_the_local_day() {
    let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
    let parsed = parse_instant_in("2024-03-11T00:00:00.000Z", &brasilia).unwrap();
    assert_eq!(parsed, at(2024, 3, 10, 21, 0));

    let edits = vec!["2024-03-11T00:00:00.000Z"];
    let recent = windowed(
        &edits,
        |raw| parse_instant_in(raw, &brasilia),
        at(2024, 3, 10, 21, 0),
        -7,
        0,
    );
    assert_eq!(recent.len(), 1);
}

#[test]
fn note_saved_now_as_utc_is_recent_against_the_system_clock() {
    let saved_at = Local::now();
    let mut note = Note::new("n1", "Agora", "Geral", "2024-01-01");
    note.last_modified = Some(
        saved_at
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    );
    let reference = SystemClock.now();
    assert!(reference >= saved_at.naive_local());

    let notes = vec![note];
    let recent = recent_notes(&notes, reference, 7);
    assert_eq!(recent.len(), 1);
}
