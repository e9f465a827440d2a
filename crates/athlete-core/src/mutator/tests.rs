//! Tests for the mutator module.

use super::*;
use crate::{
    aggregate::flatten,
    catalog::templates_for_category,
    models::{CategoryBlock, SetEntry},
};

fn planned_day() -> DaySessions {
    let block = |name: &str| {
        CategoryBlock::new(
            name,
            templates_for_category(name)
                .iter()
                .map(ExerciseRecord::from_template)
                .collect(),
        )
    };
    DaySessions {
        morning: vec![block("Warm Up"), block("Half Squads"), block("Core")],
        evening: vec![block("Heavy Weights")],
    }
}

fn at(category_index: usize, exercise_index: usize) -> Locator {
    Locator::new(SessionType::Morning, category_index, exercise_index)
}

#[test]
fn test_set_field_numeric_and_text() {
    let mut day = planned_day();
    let loc = at(0, 2);

    set_field(&mut day, &loc, ExerciseField::Sets, "4").unwrap();
    set_field(&mut day, &loc, ExerciseField::Reps, " 12 ").unwrap();
    set_field(&mut day, &loc, ExerciseField::Weight, "17.5").unwrap();
    set_field(&mut day, &loc, ExerciseField::Duration, "abc").unwrap();
    set_field(&mut day, &loc, ExerciseField::Notes, "Slow tempo").unwrap();

    let record = record_at(&day, &loc).unwrap();
    assert_eq!(record.sets, 4);
    assert_eq!(record.reps, "12");
    assert_eq!(record.weight, 17);
    assert_eq!(record.duration, 0);
    assert_eq!(record.notes, "Slow tempo");
}

#[test]
fn test_set_field_is_idempotent() {
    let mut once = planned_day();
    let mut twice = planned_day();
    let loc = Locator::new(SessionType::Evening, 0, 0);

    set_field(&mut once, &loc, ExerciseField::Weight, "50").unwrap();
    set_field(&mut twice, &loc, ExerciseField::Weight, "50").unwrap();
    set_field(&mut twice, &loc, ExerciseField::Weight, "50").unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_out_of_range_locator_is_an_error() {
    let mut day = planned_day();
    let err = set_field(&mut day, &at(0, 9), ExerciseField::Sets, "1").unwrap_err();
    assert!(matches!(
        err,
        TrackerError::ExerciseNotFound {
            category_index: 0,
            exercise_index: 9,
            ..
        }
    ));
    assert!(skip(&mut day, &at(7, 0)).is_err());
    assert!(delete(&mut day, &at(7, 0)).is_err());
}

#[test]
fn test_complete_snapshots_dials() {
    let mut day = planned_day();
    let loc = at(1, 0);
    let dials = DialValues {
        sets: 5,
        reps: 4,
        weight: 70,
        duration: 0,
    };

    complete(&mut day, &loc, Some(&dials)).unwrap();

    let record = record_at(&day, &loc).unwrap();
    assert!(record.completed);
    assert_eq!(record.status, Some(ExerciseStatus::Completed));
    assert_eq!(record.sets, 5);
    assert_eq!(record.reps, "4");
    assert_eq!(record.weight, 70);
}

#[test]
fn test_complete_without_dials_keeps_values() {
    let mut day = planned_day();
    let loc = at(0, 0);
    let before = record_at(&day, &loc).unwrap().clone();

    complete(&mut day, &loc, None).unwrap();

    let record = record_at(&day, &loc).unwrap();
    assert_eq!(record.reps, before.reps);
    assert_eq!(record.duration, before.duration);
}

#[test]
fn test_complete_increments_completed_by_one() {
    let mut day = planned_day();
    let before = flatten(&day, SessionType::Morning).stats();

    complete(&mut day, &at(2, 3), None).unwrap();

    let after = flatten(&day, SessionType::Morning).stats();
    assert_eq!(after.completed, before.completed + 1);
    assert_eq!(after.total, before.total);
}

#[test]
fn test_complete_only_touches_addressed_record() {
    let mut day = planned_day();
    day.morning[0].exercises[1].name = "Leg Swings".to_string();
    day.morning[0].exercises[2].name = "Leg Swings".to_string();

    complete(&mut day, &at(0, 1), None).unwrap();

    assert!(day.morning[0].exercises[1].completed);
    assert!(!day.morning[0].exercises[2].completed);
}

#[test]
fn test_skip_keeps_completed_flag_and_numbers() {
    let mut day = planned_day();
    let loc = at(2, 1);
    let before = record_at(&day, &loc).unwrap().clone();
    let stats_before = flatten(&day, SessionType::Morning).stats();

    skip(&mut day, &loc).unwrap();

    let record = record_at(&day, &loc).unwrap();
    assert_eq!(record.status, Some(ExerciseStatus::Skipped));
    assert_eq!(record.completed, before.completed);
    assert_eq!(record.weight, before.weight);
    assert_eq!(record.reps, before.reps);

    let stats_after = flatten(&day, SessionType::Morning).stats();
    assert_eq!(stats_after.skipped, stats_before.skipped + 1);
}

#[test]
fn test_delete_removes_record() {
    let mut day = planned_day();
    let removed = delete(&mut day, &at(2, 0)).unwrap();

    assert_eq!(removed.name, "Planks");
    assert_eq!(day.morning[2].exercises.len(), 4);
    assert_eq!(day.morning[2].exercises[0].name, "Russian Twists");
}

#[test]
fn test_delete_last_exercise_removes_category() {
    let mut day = planned_day();
    assert_eq!(day.morning[1].category, "Half Squads");

    delete(&mut day, &at(1, 0)).unwrap();

    let categories: Vec<&str> = day.morning.iter().map(|b| b.category.as_str()).collect();
    assert_eq!(categories, ["Warm Up", "Core"]);
    assert!(flatten(&day, SessionType::Morning)
        .iter()
        .all(|e| e.category != "Half Squads"));
}

#[test]
fn test_duplicate_inserts_fresh_copy_after_original() {
    let mut day = planned_day();
    let loc = Locator::new(SessionType::Evening, 0, 0);
    complete(&mut day, &loc, None).unwrap();
    set_field(&mut day, &loc, ExerciseField::Notes, "Paused reps").unwrap();
    day.evening[0].exercises[0].set_data = Some(vec![SetEntry {
        reps: "8".to_string(),
        weight: "80".to_string(),
    }]);

    let inserted = duplicate(&mut day, &loc).unwrap();

    assert_eq!(inserted, Locator::new(SessionType::Evening, 0, 1));
    let copy = record_at(&day, &inserted).unwrap();
    assert_eq!(copy.name, "Bench Press");
    assert_eq!(copy.sets, 4);
    assert_eq!(copy.reps, "8");
    assert_eq!(copy.weight, 80);
    assert!(!copy.completed);
    assert_eq!(copy.status, None);
    assert!(copy.notes.is_empty());
    assert!(copy.set_data.is_none());
    assert_eq!(day.evening[0].exercises[2].name, "Squats");
}

#[test]
fn test_duplicate_falls_back_on_blank_values() {
    let mut day = planned_day();
    let loc = at(0, 0);
    set_field(&mut day, &loc, ExerciseField::Sets, "").unwrap();
    set_field(&mut day, &loc, ExerciseField::Reps, "").unwrap();

    let inserted = duplicate(&mut day, &loc).unwrap();

    let copy = record_at(&day, &inserted).unwrap();
    assert_eq!(copy.sets, FALLBACK_SETS);
    assert_eq!(copy.reps, FALLBACK_REPS);
    assert_eq!(copy.weight, 0);
    assert_eq!(copy.duration, 5);
}

#[test]
fn test_dial_values_from_record() {
    let record = ExerciseRecord {
        sets: 3,
        reps: "-".to_string(),
        weight: 60,
        duration: 0,
        ..Default::default()
    };
    let mut dials = DialValues::from_record(&record);
    assert_eq!(dials.reps, 0);
    assert_eq!(dials.weight, 60);

    dials.set(ExerciseField::Reps, 12).unwrap();
    dials.set(ExerciseField::Weight, DialValues::MAX_WEIGHT).unwrap();
    assert_eq!(dials.reps, 12);
    assert_eq!(dials.weight, 200);
    assert!(dials.set(ExerciseField::Notes, 1).is_err());
}

#[test]
fn test_dial_values_reject_values_above_maximum() {
    let mut dials = DialValues {
        weight: 80,
        ..Default::default()
    };

    let err = dials.set(ExerciseField::Weight, 220).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidInput { ref field, .. } if field == "weight"
    ));
    assert_eq!(dials.weight, 80);

    assert!(dials.set(ExerciseField::Sets, 51).is_err());
    assert!(dials.set(ExerciseField::Duration, 121).is_err());
}

#[test]
fn test_field_from_str() {
    assert_eq!("Weight".parse::<ExerciseField>().unwrap(), ExerciseField::Weight);
    assert!("tempo".parse::<ExerciseField>().is_err());
}
