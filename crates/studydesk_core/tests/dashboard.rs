use chrono::{NaiveDate, NaiveDateTime};
use studydesk_core::{
    build_dashboard, build_profile, ActivityKind, Clock, CoreConfig, FixedClock, StudySnapshot,
};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn snapshot() -> StudySnapshot {
    StudySnapshot::from_json_str(
        r#"{
            "notes": [
                {"id": "n1", "title": "Resumo CF", "subject": "Constitucional", "content": "...", "date": "2024-03-01", "lastModified": "2024-03-09T18:00:00"},
                {"id": "n2", "title": "Súmulas", "subject": "Penal", "date": "2024-03-01"},
                {"id": "n3", "title": "Contratos", "subject": "Civil", "date": "2024-03-08"}
            ],
            "events": [
                {"id": "e1", "title": "Simulado", "date": "2024-03-11T08:00:00", "type": "exam"},
                {"id": "e2", "title": "Aula", "date": "2024-03-01", "type": "class"},
                {"id": "e3", "title": "Mentoria", "date": "2024-03-15", "type": "workshop"}
            ],
            "plans": [
                {"id": "p1", "title": "CF", "subject": "Constitucional", "dueDate": "2024-03-05", "priority": "high", "status": "done", "progress": 100, "date": "2024-02-20"},
                {"id": "p2", "title": "Penal", "subject": "Penal", "dueDate": "2024-03-25", "priority": "low", "status": "in-progress", "progress": 50}
            ],
            "testResults": [
                {"id": "t1", "date": "2024-03-01", "correctAnswers": 9, "totalQuestions": 10},
                {"id": "t2", "date": "2024-03-07", "correctAnswers": 6, "totalQuestions": 10}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn dashboard_combines_windows_goals_and_activity() {
    let clock = FixedClock(reference());
    let summary = build_dashboard(&snapshot(), clock.now(), &CoreConfig::default());

    assert_eq!(summary.upcoming_count(), 2);
    assert_eq!(summary.upcoming_events[0].id, "e1");
    assert_eq!(summary.recent_notes_count(), 2);
    assert_eq!(summary.recent_notes[0].id, "n1");
    assert_eq!(
        (summary.monthly_goals.completed, summary.monthly_goals.total),
        (1, 2)
    );
    assert_eq!(summary.overall_progress_percent, 75);
    assert_eq!(summary.overdue_plans, 0);

    let titles = summary
        .recent_activity
        .iter()
        .map(|item| item.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Mentoria", "Simulado", "Resumo CF"]);
    assert_eq!(summary.recent_activity[2].kind, ActivityKind::Note);
}

#[test]
fn config_controls_windows_and_caps() {
    let config = CoreConfig::from_json_str(
        r#"{"upcoming_days": 1, "recent_days": 30, "activity_per_source": 1, "activity_max_items": 2}"#,
    )
    .unwrap();
    let summary = build_dashboard(&snapshot(), reference(), &config);

    assert_eq!(summary.upcoming_count(), 1);
    assert_eq!(summary.recent_notes_count(), 3);
    assert_eq!(summary.recent_activity.len(), 2);
}

#[test]
fn profile_counts_distinct_days_and_weighted_score() {
    let profile = build_profile(&snapshot());
    assert_eq!(profile.notes_count, 3);
    assert_eq!(profile.tests_count, 2);
    // 03-01, 03-08, 03-11, 03-15, 03-07 and plan creation 02-20.
    assert_eq!(profile.study_days, 6);
    assert_eq!(profile.average_score_percent, 75);
}

#[test]
fn empty_snapshot_yields_empty_dashboard() {
    let snapshot = StudySnapshot::from_json_str("{}").unwrap();
    let summary = build_dashboard(&snapshot, reference(), &CoreConfig::default());
    assert_eq!(summary.upcoming_count(), 0);
    assert!(summary.recent_activity.is_empty());
    assert_eq!(summary.overall_progress_percent, 0);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["monthlyGoals"]["total"], 0);
}
