use chrono::{NaiveDate, NaiveDateTime};
use studydesk_core::{recent_activity, ActivityKind, Event, EventKind, Note};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn feed_merges_newest_first_and_caps_items() {
    let events = vec![
        Event::new("e1", "Prova OAB", "2024-03-12T09:00:00", EventKind::Exam),
        Event::new("e2", "Aula", "2024-03-14T19:00:00", EventKind::Class),
        Event::new("e3", "Prazo", "2024-03-15", EventKind::Deadline),
    ];
    let notes = vec![
        Note::new("n1", "Resumo CF", "Constitucional", "2024-03-09T20:00:00"),
        Note::new("n2", "Súmulas", "Penal", "2024-03-08"),
    ];
    let event_refs = events.iter().collect::<Vec<_>>();
    let note_refs = notes.iter().collect::<Vec<_>>();

    let feed = recent_activity(&event_refs, &note_refs, 2, 3);
    let titles = feed.iter().map(|item| item.title.as_str()).collect::<Vec<_>>();
    // e3 is beyond the per-source cap.
    assert_eq!(titles, vec!["Aula", "Prova OAB", "Resumo CF"]);
    assert_eq!(feed[0].kind, ActivityKind::Event);
    assert_eq!(feed[0].description, "Event scheduled for 2024-03-14");
    assert_eq!(feed[2].description, "Note in Constitucional");
}

#[test]
fn equal_timestamps_put_events_before_notes() {
    let events = vec![Event::new("e1", "Estudo", "2024-03-10", EventKind::StudySession)];
    let notes = vec![Note::new("n1", "Anotação", "Civil", "2024-03-10T00:00:00")];

    let feed = recent_activity(
        &events.iter().collect::<Vec<_>>(),
        &notes.iter().collect::<Vec<_>>(),
        2,
        3,
    );
    let kinds = feed.iter().map(|item| item.kind).collect::<Vec<_>>();
    assert_eq!(kinds, vec![ActivityKind::Event, ActivityKind::Note]);
    assert_eq!(feed[0].timestamp, at(10, 0));
}

#[test]
fn reordered_same_kind_inputs_still_come_out_descending() {
    let notes = vec![
        Note::new("old", "Antiga", "Civil", "2024-03-05"),
        Note::new("new", "Nova", "Civil", "2024-03-09"),
    ];
    let reversed = notes.iter().rev().collect::<Vec<_>>();
    let forward = notes.iter().collect::<Vec<_>>();

    for slice in [forward, reversed] {
        let feed = recent_activity(&[], &slice, 2, 3);
        let stamps = feed.iter().map(|item| item.timestamp).collect::<Vec<_>>();
        assert_eq!(stamps, vec![at(9, 0), at(5, 0)]);
    }
}

#[test]
fn empty_sources_give_empty_feed() {
    assert!(recent_activity(&[], &[], 2, 3).is_empty());
}
