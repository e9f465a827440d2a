//! Tests for the tracker module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    aggregate::flatten,
    error::TrackerError,
    models::{ExerciseStatus, SessionArchive},
    mutator::ExerciseField,
    params::{BestsQuery, PlanSession, SummaryRange},
    store::MemoryStore,
};

/// Helper function to create a tracker over a fresh on-disk database
fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

#[test]
fn test_plan_warm_up_and_core() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    let today = date(2024, 6, 1);

    let day = tracker
        .plan_session(&PlanSession::new(
            today,
            SessionType::Morning,
            ["Warm Up", "Core"],
        ))
        .expect("Failed to plan session");

    let flat = flatten(&day, SessionType::Morning);
    assert_eq!(flat.len(), 8);
    let stats = flat.stats();
    assert_eq!((stats.total, stats.completed, stats.skipped), (8, 0, 0));
    assert!(flat
        .iter()
        .all(|e| !e.record.completed && e.record.status.is_none()));

    assert_eq!(tracker.load_day(today), day);
}

#[test]
fn test_plan_skips_unknown_and_repeated_categories() {
    let mut tracker = Tracker::with_store(MemoryStore::new());
    let day = tracker
        .plan_session(&PlanSession::new(
            date(2024, 6, 1),
            SessionType::Evening,
            ["Core", "Underwater Basket Weaving", "Core"],
        ))
        .unwrap();

    assert_eq!(day.evening.len(), 1);
    assert_eq!(day.evening[0].category, "Core");
    assert!(day.morning.is_empty());
}

#[test]
fn test_plan_keeps_other_session() {
    let mut tracker = Tracker::with_store(MemoryStore::new());
    let today = date(2024, 6, 1);
    tracker
        .plan_session(&PlanSession::new(today, SessionType::Morning, ["Warm Up"]))
        .unwrap();
    tracker
        .plan_session(&PlanSession::new(today, SessionType::Evening, ["Sprints"]))
        .unwrap();

    let replanned = tracker
        .plan_session(&PlanSession::new(today, SessionType::Morning, ["Cool Down"]))
        .unwrap();

    assert_eq!(replanned.morning[0].category, "Cool Down");
    assert_eq!(replanned.evening[0].category, "Sprints");
}

#[test]
fn test_plan_group() {
    let mut tracker = Tracker::with_store(MemoryStore::new());
    let day = tracker
        .plan_group(date(2024, 6, 1), SessionType::Morning, "strength")
        .unwrap();
    let categories: Vec<&str> = day.morning.iter().map(|b| b.category.as_str()).collect();
    assert_eq!(categories, ["Heavy Weights", "Light Weights", "Half Squads"]);

    assert!(matches!(
        tracker.plan_group(date(2024, 6, 1), SessionType::Morning, "Yoga"),
        Err(TrackerError::UnknownGroup(_))
    ));
}

#[test]
fn test_clear_session() {
    let mut tracker = Tracker::with_store(MemoryStore::new());
    let today = date(2024, 6, 1);
    tracker
        .plan_session(&PlanSession::new(today, SessionType::Morning, ["Core"]))
        .unwrap();

    let day = tracker.clear_session(today, SessionType::Morning).unwrap();
    assert!(day.is_empty());
    assert!(tracker.load_day(today).is_empty());
}

#[test]
fn test_workout_round_trip_through_database() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    let today = date(2024, 6, 1);
    tracker
        .plan_session(&PlanSession::new(today, SessionType::Morning, ["Heavy Weights"]))
        .unwrap();

    {
        let mut workout = tracker.workout(today, SessionType::Morning);
        workout.complete().unwrap();
        workout.skip().unwrap();
    }

    let day = tracker.load_day(today);
    assert_eq!(
        day.morning[0].exercises[0].status,
        Some(ExerciseStatus::Completed)
    );
    assert_eq!(
        day.morning[0].exercises[1].status,
        Some(ExerciseStatus::Skipped)
    );
    assert!(!day.morning[0].exercises[1].completed);
}

#[test]
fn test_bests_use_configured_window() {
    let mut tracker = Tracker::with_store(MemoryStore::new()).with_season_window(1);
    for (day, weight) in [(date(2024, 4, 10), "95"), (date(2024, 5, 20), "85")] {
        tracker
            .plan_session(&PlanSession::new(day, SessionType::Morning, ["Heavy Weights"]))
            .unwrap();
        let mut workout = tracker.workout(day, SessionType::Morning);
        workout.set_field(ExerciseField::Weight, weight).unwrap();
    }

    let as_of = date(2024, 6, 1);
    let configured = tracker.bests_for("Bench Press", as_of).unwrap();
    assert_eq!(configured.personal_best, Some(95));
    assert_eq!(configured.season_best, Some(85));

    let wide = tracker
        .bests(&BestsQuery::new("Bench Press", as_of).with_window(3))
        .unwrap();
    assert_eq!(wide.season_best, Some(95));
}

#[test]
fn test_summarize_range() {
    let mut tracker = Tracker::with_store(MemoryStore::new());
    for day in [date(2024, 5, 1), date(2024, 5, 2), date(2024, 5, 3)] {
        tracker
            .plan_session(&PlanSession::new(day, SessionType::Evening, ["Sprints"]))
            .unwrap();
    }
    tracker
        .workout(date(2024, 5, 2), SessionType::Evening)
        .complete()
        .unwrap();

    let summaries = tracker
        .summarize(&SummaryRange {
            from: Some(date(2024, 5, 2)),
            to: None,
        })
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].date, date(2024, 5, 2));
    assert_eq!(summaries[0].evening.completed, 1);
    assert_eq!(summaries[0].evening.total, 2);
    assert_eq!(summaries[0].morning.total, 0);
}

#[test]
fn test_export_skips_malformed_and_import_restores() {
    let mut source = Tracker::with_store(MemoryStore::new());
    source
        .plan_session(&PlanSession::new(
            date(2024, 5, 1),
            SessionType::Morning,
            ["Core"],
        ))
        .unwrap();
    source
        .store_mut()
        .write_entry("athlete-sessions-2024-05-02", "not json")
        .unwrap();

    let archive = source.export().unwrap();
    assert_eq!(archive.len(), 1);

    let json = serde_json::to_string(&archive).unwrap();
    assert!(json.starts_with("{\"2024-05-01\":"));
    let parsed: SessionArchive = serde_json::from_str(&json).unwrap();

    let (_temp_dir, mut target) = create_test_tracker();
    assert_eq!(target.import(&parsed).unwrap(), 1);
    assert_eq!(
        target.load_day(date(2024, 5, 1)),
        source.load_day(date(2024, 5, 1))
    );
}
