//! High-level tracker API over a session store.
//!
//! [`Tracker`] is the entry point front ends use. It owns one
//! [`SessionStore`] and groups the operations into submodules:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Front end    │    │     Tracker     │    │  SessionStore   │
//! │   (CLI, tests)  │───▶│ (plan_ops,      │───▶│ (Database,      │
//! │                 │    │  history_ops)   │    │  MemoryStore)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: opens the SQLite store at a configured or XDG path
//! - [`plan_ops`]: planning sessions from catalog categories
//! - [`history_ops`]: bests, summaries, export and import
//!
//! Workout mode is reached through [`Tracker::workout`], which lends the
//! store to a [`WorkoutSession`] for as long as the workout is open.
//!
//! # Examples
//!
//! ```rust
//! use athlete_core::{params::PlanSession, store::MemoryStore, SessionType, Tracker};
//! use jiff::civil::date;
//!
//! let mut tracker = Tracker::with_store(MemoryStore::new());
//! let today = date(2024, 6, 1);
//!
//! tracker.plan_session(&PlanSession::new(today, SessionType::Morning, ["Warm Up", "Core"]))?;
//!
//! let mut workout = tracker.workout(today, SessionType::Morning);
//! assert_eq!(workout.stats().total, 8);
//! workout.complete()?;
//! assert_eq!(workout.stats().completed, 1);
//! # Ok::<(), athlete_core::TrackerError>(())
//! ```

use jiff::civil::Date;

use crate::{
    bests::DEFAULT_SEASON_WINDOW_MONTHS,
    db::Database,
    models::{DaySessions, SessionType},
    store::SessionStore,
    workout::WorkoutSession,
};

pub mod builder;
pub mod history_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface for planning, logging and reviewing sessions.
pub struct Tracker<S: SessionStore = Database> {
    pub(crate) store: S,
    pub(crate) season_window_months: u32,
}

impl<S: SessionStore> Tracker<S> {
    /// Creates a tracker over any store with the default season window.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            season_window_months: DEFAULT_SEASON_WINDOW_MONTHS,
        }
    }

    /// Sets the season window used when a query does not name one.
    pub fn with_season_window(mut self, months: u32) -> Self {
        self.season_window_months = months;
        self
    }

    pub fn season_window_months(&self) -> u32 {
        self.season_window_months
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Sessions stored for `date`, empty when nothing readable is stored.
    pub fn load_day(&self, date: Date) -> DaySessions {
        self.store.load(date)
    }

    /// Opens workout mode on one session, positioned on its first exercise.
    pub fn workout(&mut self, date: Date, session_type: SessionType) -> WorkoutSession<'_, S> {
        WorkoutSession::open(&mut self.store, date, session_type)
    }
}
