//! Data models for planned and logged training sessions.
//!
//! The persisted shape is a [`DaySessions`] per calendar date holding ordered
//! morning and evening [`CategoryBlock`]s, each an ordered list of
//! [`ExerciseRecord`]s. Field names and value types follow the stored JSON
//! exactly, and deserialization tolerates the loose typing older records
//! carry (numbers stored as strings, missing optional fields, unknown
//! statuses).
//!
//! Display implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use athlete_core::models::{DaySessions, ExerciseStatus};
//!
//! let raw = r#"{
//!     "morning": [{
//!         "category": "Heavy Weights",
//!         "exercises": [{
//!             "name": "Bench Press", "sets": "4", "reps": 8, "weight": "80",
//!             "duration": 0, "completed": true, "status": "completed"
//!         }]
//!     }]
//! }"#;
//!
//! let day: DaySessions = serde_json::from_str(raw)?;
//! let bench = &day.morning[0].exercises[0];
//! assert_eq!(bench.sets, 4);
//! assert_eq!(bench.reps, "8");
//! assert_eq!(bench.weight, 80);
//! assert_eq!(bench.status, Some(ExerciseStatus::Completed));
//! assert!(day.evening.is_empty());
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod exercise;
pub mod lenient;
pub mod session;
pub mod status;
pub mod summary;


pub use exercise::{ExerciseRecord, ExerciseTemplate, SetEntry};
pub use lenient::parse_int_or_zero;
pub use session::{CategoryBlock, DaySessions};
pub use status::{ExerciseStatus, SessionType};
pub use summary::{Bests, DaySummary, Progress, SessionArchive, SessionStats};
