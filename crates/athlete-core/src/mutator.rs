//! Field edits and status transitions on a single exercise record.
//!
//! Every function here edits a [`DaySessions`] in place and addresses one
//! record through a [`Locator`]. Persisting the result is the caller's job;
//! [`crate::workout::WorkoutSession`] clones, edits, saves and only then adopts
//! the new state.

use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    error::{Result, TrackerError},
    models::{parse_int_or_zero, DaySessions, ExerciseRecord, ExerciseStatus, SessionType},
};

/// Reps written onto a copied exercise whose original had none.
pub const FALLBACK_REPS: &str = "10";

/// Sets written onto a copied exercise whose original had none.
pub const FALLBACK_SETS: u32 = 3;

/// Address of one exercise record within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    pub session_type: SessionType,
    pub category_index: usize,
    pub exercise_index: usize,
}

impl Locator {
    pub fn new(session_type: SessionType, category_index: usize, exercise_index: usize) -> Self {
        Self {
            session_type,
            category_index,
            exercise_index,
        }
    }

    fn not_found(&self) -> TrackerError {
        TrackerError::ExerciseNotFound {
            session_type: self.session_type,
            category_index: self.category_index,
            exercise_index: self.exercise_index,
        }
    }
}

/// Editable fields of an exercise record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseField {
    Sets,
    Reps,
    Weight,
    Duration,
    Notes,
}

impl ExerciseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseField::Sets => "sets",
            ExerciseField::Reps => "reps",
            ExerciseField::Weight => "weight",
            ExerciseField::Duration => "duration",
            ExerciseField::Notes => "notes",
        }
    }
}

impl fmt::Display for ExerciseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseField {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sets" => Ok(ExerciseField::Sets),
            "reps" => Ok(ExerciseField::Reps),
            "weight" => Ok(ExerciseField::Weight),
            "duration" => Ok(ExerciseField::Duration),
            "notes" => Ok(ExerciseField::Notes),
            _ => Err(TrackerError::invalid_input("field").with_reason(format!(
                "Invalid field: {s}. Must be one of sets, reps, weight, duration, notes"
            ))),
        }
    }
}

/// Numeric values staged on the workout-mode dials for the current exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialValues {
    pub sets: u32,
    pub reps: u32,
    pub weight: u32,
    pub duration: u32,
}

impl DialValues {
    pub const MAX_SETS: u32 = 50;
    pub const MAX_REPS: u32 = 100;
    pub const MAX_WEIGHT: u32 = 200;
    pub const MAX_DURATION: u32 = 120;

    /// Dial positions for a record, reading each field with `parseInt` rules.
    pub fn from_record(record: &ExerciseRecord) -> Self {
        Self {
            sets: record.sets,
            reps: parse_int_or_zero(&record.reps),
            weight: record.weight,
            duration: record.duration,
        }
    }

    /// Moves one dial.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for values above the dial's
    /// maximum, leaving the dial where it was, and for `Notes`.
    pub fn set(&mut self, field: ExerciseField, value: u32) -> Result<()> {
        let (slot, max) = match field {
            ExerciseField::Sets => (&mut self.sets, Self::MAX_SETS),
            ExerciseField::Reps => (&mut self.reps, Self::MAX_REPS),
            ExerciseField::Weight => (&mut self.weight, Self::MAX_WEIGHT),
            ExerciseField::Duration => (&mut self.duration, Self::MAX_DURATION),
            ExerciseField::Notes => {
                return Err(TrackerError::invalid_input(field.as_str())
                    .with_reason("Notes have no dial"));
            }
        };
        if value > max {
            return Err(TrackerError::invalid_input(field.as_str())
                .with_reason(format!("{value} is above the dial maximum of {max}")));
        }
        *slot = value;
        Ok(())
    }
}

/// Record addressed by `locator`.
pub fn record_at<'a>(day: &'a DaySessions, locator: &Locator) -> Result<&'a ExerciseRecord> {
    day.session(locator.session_type)
        .get(locator.category_index)
        .and_then(|block| block.exercises.get(locator.exercise_index))
        .ok_or_else(|| locator.not_found())
}

fn record_at_mut<'a>(
    day: &'a mut DaySessions,
    locator: &Locator,
) -> Result<&'a mut ExerciseRecord> {
    day.session_mut(locator.session_type)
        .get_mut(locator.category_index)
        .and_then(|block| block.exercises.get_mut(locator.exercise_index))
        .ok_or_else(|| locator.not_found())
}

/// Writes one field of the addressed record.
///
/// Numeric fields take numeric-looking strings and read anything else as 0.
/// Writing the same value twice leaves the record as writing it once.
pub fn set_field(
    day: &mut DaySessions,
    locator: &Locator,
    field: ExerciseField,
    value: &str,
) -> Result<()> {
    let record = record_at_mut(day, locator)?;
    match field {
        ExerciseField::Sets => record.sets = parse_int_or_zero(value),
        ExerciseField::Reps => record.reps = value.trim().to_string(),
        ExerciseField::Weight => record.weight = parse_int_or_zero(value),
        ExerciseField::Duration => record.duration = parse_int_or_zero(value),
        ExerciseField::Notes => record.notes = value.to_string(),
    }
    debug!("Set {field} of {} to {value:?}", record.name);
    Ok(())
}

/// Marks the addressed record completed, snapshotting staged dial values.
pub fn complete(
    day: &mut DaySessions,
    locator: &Locator,
    dials: Option<&DialValues>,
) -> Result<()> {
    let record = record_at_mut(day, locator)?;
    if let Some(dials) = dials {
        record.sets = dials.sets;
        record.reps = dials.reps.to_string();
        record.weight = dials.weight;
        record.duration = dials.duration;
    }
    record.completed = true;
    record.status = Some(ExerciseStatus::Completed);
    debug!("Completed {}", record.name);
    Ok(())
}

/// Marks the addressed record skipped. Numeric fields and `completed` are
/// left untouched.
pub fn skip(day: &mut DaySessions, locator: &Locator) -> Result<()> {
    let record = record_at_mut(day, locator)?;
    record.status = Some(ExerciseStatus::Skipped);
    debug!("Skipped {}", record.name);
    Ok(())
}

/// Removes the addressed record, dropping its category block once empty.
pub fn delete(day: &mut DaySessions, locator: &Locator) -> Result<ExerciseRecord> {
    record_at(day, locator)?;

    let blocks = day.session_mut(locator.session_type);
    let block = &mut blocks[locator.category_index];
    let removed = block.exercises.remove(locator.exercise_index);
    if block.exercises.is_empty() {
        let emptied = blocks.remove(locator.category_index);
        debug!("Removed empty category {}", emptied.category);
    }
    debug!("Deleted {}", removed.name);
    Ok(removed)
}

/// Inserts a fresh copy of the addressed record right after it.
///
/// The copy keeps the original's sets, reps, weight and duration (falling
/// back to [`FALLBACK_SETS`] and [`FALLBACK_REPS`] when blank), starts with
/// no status, no notes and no per-set breakdown. Returns the copy's locator.
pub fn duplicate(day: &mut DaySessions, locator: &Locator) -> Result<Locator> {
    let original = record_at(day, locator)?;
    let copy = ExerciseRecord {
        name: original.name.clone(),
        sets: if original.sets == 0 {
            FALLBACK_SETS
        } else {
            original.sets
        },
        reps: if original.reps.trim().is_empty() {
            FALLBACK_REPS.to_string()
        } else {
            original.reps.clone()
        },
        weight: original.weight,
        duration: original.duration,
        ..Default::default()
    };

    let inserted = Locator {
        exercise_index: locator.exercise_index + 1,
        ..*locator
    };
    day.session_mut(locator.session_type)[locator.category_index]
        .exercises
        .insert(inserted.exercise_index, copy);
    debug!(
        "Added a following exercise at category {}, position {}",
        inserted.category_index, inserted.exercise_index
    );
    Ok(inserted)
}

#[cfg(test)]
mod tests;
