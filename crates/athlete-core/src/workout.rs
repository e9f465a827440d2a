//! Workout mode: stepping through one session an exercise at a time.
//!
//! A [`WorkoutSession`] is the single owner of one open (date, session)
//! pair. It holds the in-memory [`DaySessions`], the cursor and the staged
//! dial values, and routes every edit through the store so that two edits to
//! the same date can never interleave.
//!
//! Edits are applied to a clone of the day first. The clone is saved, and
//! only a successful save replaces the in-memory state, so a failed write
//! leaves both the store and the session exactly as they were.

use jiff::civil::Date;
use log::debug;

use crate::{
    aggregate::{clamp_index, flatten, navigate, FlatExercise, Flattened, Navigation},
    bests::bests,
    error::{Result, TrackerError},
    models::{Bests, DaySessions, ExerciseRecord, Progress, SessionStats, SessionType},
    mutator::{self, DialValues, ExerciseField, Locator},
    store::SessionStore,
};

/// One open workout over a borrowed store.
#[derive(Debug)]
pub struct WorkoutSession<'s, S: SessionStore + ?Sized> {
    store: &'s mut S,
    date: Date,
    session_type: SessionType,
    day: DaySessions,
    index: usize,
    dials: DialValues,
}

impl<'s, S: SessionStore + ?Sized> WorkoutSession<'s, S> {
    /// Opens the session stored for `date`, positioned on its first exercise.
    pub fn open(store: &'s mut S, date: Date, session_type: SessionType) -> Self {
        let day = store.load(date);
        let mut session = Self {
            store,
            date,
            session_type,
            day,
            index: 0,
            dials: DialValues::default(),
        };
        session.reload_dials();
        session
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// The whole day as last persisted.
    pub fn day(&self) -> &DaySessions {
        &self.day
    }

    /// 0-based cursor; equal to the exercise count once the workout is over.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn exercises(&self) -> Flattened<'_> {
        flatten(&self.day, self.session_type)
    }

    /// Exercise under the cursor, `None` once every exercise was passed.
    pub fn current(&self) -> Option<FlatExercise<'_>> {
        self.exercises().get(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.current().is_none()
    }

    pub fn stats(&self) -> SessionStats {
        self.exercises().stats()
    }

    /// Cursor position and completion counts for a progress line.
    pub fn position(&self) -> Progress {
        Progress {
            current: self.index + 1,
            stats: self.stats(),
        }
    }

    pub fn dials(&self) -> &DialValues {
        &self.dials
    }

    /// Moves the cursor and reloads the dials from the new exercise.
    pub fn navigate(&mut self, movement: Navigation) {
        self.index = navigate(self.index, self.exercises().len(), movement);
        self.reload_dials();
        debug!("Moved to position {} of {}", self.index, self.session_type);
    }

    /// Moves the cursor to the first exercise neither completed nor skipped,
    /// or past the end when there is none.
    pub fn resume(&mut self) {
        let flat = self.exercises();
        let index = flat
            .iter()
            .position(|e| !e.record.is_completed() && !e.record.is_skipped())
            .unwrap_or(flat.len());
        self.index = index;
        self.reload_dials();
    }

    /// Stages a dial value for the next [`WorkoutSession::complete`].
    ///
    /// Values above the dial's maximum are rejected; nothing is persisted.
    pub fn stage(&mut self, field: ExerciseField, value: u32) -> Result<()> {
        self.dials.set(field, value)
    }

    /// Writes one field of the current exercise and persists the day.
    pub fn set_field(&mut self, field: ExerciseField, value: &str) -> Result<()> {
        self.commit(|day, locator| mutator::set_field(day, locator, field, value))?;
        self.reload_dials();
        Ok(())
    }

    /// Completes the current exercise with the staged dials and advances.
    pub fn complete(&mut self) -> Result<()> {
        let dials = self.dials;
        self.commit(|day, locator| mutator::complete(day, locator, Some(&dials)))?;
        self.navigate(Navigation::Advance);
        Ok(())
    }

    /// Skips the current exercise and advances.
    pub fn skip(&mut self) -> Result<()> {
        self.commit(mutator::skip)?;
        self.navigate(Navigation::Advance);
        Ok(())
    }

    /// Deletes the current exercise, re-clamping the cursor afterwards.
    pub fn delete(&mut self) -> Result<ExerciseRecord> {
        let removed = self.commit(mutator::delete)?;
        self.index = clamp_index(self.index, self.exercises().len());
        self.reload_dials();
        Ok(removed)
    }

    /// Inserts a fresh copy of the current exercise after it and moves onto
    /// the copy.
    pub fn add_following(&mut self) -> Result<()> {
        let inserted = self.commit(mutator::duplicate)?;
        let position = self
            .exercises()
            .position_of(inserted.category_index, inserted.exercise_index);
        if let Some(position) = position {
            self.index = position;
        }
        self.reload_dials();
        Ok(())
    }

    /// Bests for the current exercise, `None` when the workout is over.
    pub fn current_bests(&self, as_of: Date, window_months: u32) -> Result<Option<Bests>> {
        match self.current() {
            Some(exercise) => {
                bests(&*self.store, &exercise.record.name, as_of, window_months).map(Some)
            }
            None => Ok(None),
        }
    }

    fn locator(&self) -> Result<Locator> {
        self.current()
            .map(|e| Locator::new(self.session_type, e.category_index, e.exercise_index))
            .ok_or_else(|| {
                TrackerError::invalid_input("exercise").with_reason(format!(
                    "The {} workout has no current exercise",
                    self.session_type
                ))
            })
    }

    fn commit<T, F>(&mut self, edit: F) -> Result<T>
    where
        F: FnOnce(&mut DaySessions, &Locator) -> Result<T>,
    {
        let locator = self.locator()?;
        let mut next = self.day.clone();
        let outcome = edit(&mut next, &locator)?;
        self.store.save(self.date, &next)?;
        self.day = next;
        Ok(outcome)
    }

    fn reload_dials(&mut self) {
        self.dials = self
            .current()
            .map(|e| DialValues::from_record(e.record))
            .unwrap_or_default();
    }
}
