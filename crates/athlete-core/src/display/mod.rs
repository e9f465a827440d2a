//! Display formatting for sessions, workout mode and summaries.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here add context such as a date heading, a progress
//! line or the catalog grouping. Every formatter produces markdown which
//! the CLI renders in the terminal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (ExerciseRecord,│───▶│ (SessionView,   │───▶│    Markdown     │
//! │  Progress, ...) │    │  DayView, ...)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: sessions, days, summaries and catalog listings
//! - [`workout`]: the current-exercise card and the finished screen
//! - [`status`]: confirmation messages
//! - [`datetime`]: calendar date formatting
//!
//! # Examples
//!
//! ```rust
//! use athlete_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("Saved the morning session");
//! assert_eq!(done.to_string(), "✓ Saved the morning session\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod workout;

pub use collections::{CatalogListing, CategoryTemplates, DaySummaries, DayView, SessionView};
pub use datetime::{DayHeading, ShortDate};
pub use status::OperationStatus;
pub use workout::{CurrentExercise, WorkoutFinished};
