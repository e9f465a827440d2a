//! Core library for the athlete training tracker.
//!
//! This crate holds the workout-session model and everything that operates on
//! it: the built-in exercise catalog, date-keyed session storage, flattened
//! session views with navigation, per-exercise edits, workout mode and
//! personal-best tracking.
//!
//! # Layout
//!
//! - [`models`]: persisted data types and their tolerant JSON form
//! - [`catalog`]: the fixed category and exercise table
//! - [`store`] and [`db`]: the [`SessionStore`] contract, SQLite and
//!   in-memory backends
//! - [`aggregate`]: flattening, statistics and cursor movement
//! - [`mutator`]: field edits and status transitions on one record
//! - [`workout`]: [`WorkoutSession`], the single owner of an open session
//! - [`bests`]: personal and season bests across stored history
//! - [`tracker`]: the [`Tracker`] facade and its builder
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use athlete_core::{params::PlanSession, SessionType, TrackerBuilder};
//! use jiff::civil::date;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = TrackerBuilder::new()
//!     .with_database_path(Some("sessions.db"))
//!     .build()?;
//!
//! let today = date(2024, 6, 1);
//! tracker.plan_session(&PlanSession::new(today, SessionType::Morning, ["Warm Up", "Core"]))?;
//!
//! let mut workout = tracker.workout(today, SessionType::Morning);
//! while let Some(exercise) = workout.current() {
//!     println!("{}", exercise.record.name);
//!     workout.complete()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod bests;
pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod mutator;
pub mod params;
pub mod store;
pub mod tracker;
pub mod workout;

// Re-export commonly used types
pub use aggregate::{flatten, navigate, Navigation};
pub use bests::{bests, BestsCache, DEFAULT_SEASON_WINDOW_MONTHS};
pub use db::Database;
pub use error::{Result, TrackerError};
pub use models::{
    Bests, CategoryBlock, DaySessions, ExerciseRecord, ExerciseStatus, ExerciseTemplate,
    SessionType,
};
pub use mutator::{DialValues, ExerciseField, Locator};
pub use params::{BestsQuery, PlanSession, SummaryRange};
pub use store::{MemoryStore, SessionStore};
pub use tracker::{Tracker, TrackerBuilder};
pub use workout::WorkoutSession;
