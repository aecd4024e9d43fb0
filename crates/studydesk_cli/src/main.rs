//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `studydesk_core` linkage with a ping/version probe.
//! - Print dashboard and profile summaries for a JSON snapshot file.
//!
//! Usage: `studydesk_cli [SNAPSHOT_JSON [CONFIG_JSON]]`

use chrono::NaiveDateTime;
use log::{error, info};
use std::process::ExitCode;
use studydesk_core::{
    build_dashboard, build_profile, init_logging_from_config, Clock, CoreConfig, StudySnapshot,
    SystemClock,
};

fn main() -> ExitCode {
    println!("studydesk_core ping={}", studydesk_core::ping());
    println!("studydesk_core version={}", studydesk_core::core_version());

    let mut args = std::env::args().skip(1);
    let Some(snapshot_path) = args.next() else {
        return ExitCode::SUCCESS;
    };
    let config_path = args.next();

    match run(&snapshot_path, config_path.as_deref(), SystemClock.now()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_summary module=cli status=error");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(snapshot_path: &str, config_path: Option<&str>, now: NaiveDateTime) -> Result<(), String> {
    let config = match config_path {
        Some(path) => CoreConfig::load(path).map_err(|err| err.to_string())?,
        None => CoreConfig::default(),
    };
    init_logging_from_config(&config)?;

    let raw = std::fs::read_to_string(snapshot_path)
        .map_err(|err| format!("cannot read snapshot `{snapshot_path}`: {err}"))?;
    let snapshot = StudySnapshot::from_json_str(&raw)
        .map_err(|err| format!("invalid snapshot `{snapshot_path}`: {err}"))?;

    let dashboard = build_dashboard(&snapshot, now, &config);
    println!("upcoming_events={}", dashboard.upcoming_count());
    println!("recent_notes={}", dashboard.recent_notes_count());
    println!(
        "monthly_goals={}/{}",
        dashboard.monthly_goals.completed, dashboard.monthly_goals.total
    );
    println!("overall_progress={}%", dashboard.overall_progress_percent);
    println!("overdue_plans={}", dashboard.overdue_plans);
    for item in &dashboard.recent_activity {
        println!(
            "activity {:?} {} | {} | {}",
            item.kind,
            item.timestamp.format("%Y-%m-%d %H:%M"),
            item.title,
            item.description
        );
    }

    let profile = build_profile(&snapshot);
    println!("notes={}", profile.notes_count);
    println!("tests={}", profile.tests_count);
    println!("study_days={}", profile.study_days);
    println!("average_score={}%", profile.average_score_percent);

    info!(
        "event=cli_summary module=cli status=ok notes={} events={} plans={}",
        snapshot.notes.len(),
        snapshot.events.len(),
        snapshot.plans.len()
    );
    Ok(())
}
