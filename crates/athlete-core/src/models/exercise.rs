//! Exercise template and record definitions.

use serde::{Deserialize, Serialize};

use super::{
    lenient::{
        bool_lenient, opt_u32_lenient, parse_int_or_zero, string_lenient, u32_lenient,
    },
    status::lenient_status,
    ExerciseStatus,
};

/// Immutable exercise prescription taken from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseTemplate {
    /// Display name, also the identity used for historical bests
    pub name: String,

    /// Prescribed number of sets
    pub sets: u32,

    /// Repetitions per set, numeric or `-` when not rep based
    pub reps: String,

    /// Load in kilograms, 0 for bodyweight
    pub weight: u32,

    /// Duration in minutes, 0 when not time based
    pub duration: u32,

    /// Coaching note shown alongside the exercise
    pub notes: String,
}

/// One set of a set-by-set breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetEntry {
    #[serde(default, deserialize_with = "string_lenient")]
    pub reps: String,

    #[serde(default, deserialize_with = "string_lenient")]
    pub weight: String,
}

impl SetEntry {
    /// Weight lifted on this set in kilograms.
    pub fn weight_kg(&self) -> u32 {
        parse_int_or_zero(&self.weight)
    }
}

/// An exercise as planned and logged within one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    #[serde(default, deserialize_with = "string_lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "u32_lenient")]
    pub sets: u32,

    #[serde(default, deserialize_with = "string_lenient")]
    pub reps: String,

    #[serde(default, deserialize_with = "u32_lenient")]
    pub weight: u32,

    #[serde(default, deserialize_with = "u32_lenient")]
    pub duration: u32,

    #[serde(default, deserialize_with = "string_lenient")]
    pub notes: String,

    #[serde(default, deserialize_with = "bool_lenient")]
    pub completed: bool,

    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<ExerciseStatus>,

    /// Per-set breakdown; when non-empty it is the source of truth for weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_data: Option<Vec<SetEntry>>,

    #[serde(
        default,
        deserialize_with = "opt_u32_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_sets: Option<u32>,
}

impl ExerciseRecord {
    /// Creates a fresh, untouched record from a catalog template.
    pub fn from_template(template: &ExerciseTemplate) -> Self {
        Self {
            name: template.name.clone(),
            sets: template.sets,
            reps: template.reps.clone(),
            weight: template.weight,
            duration: template.duration,
            notes: template.notes.clone(),
            completed: false,
            status: None,
            set_data: None,
            num_sets: None,
        }
    }

    /// Whether the record counts as completed in session statistics.
    ///
    /// A skipped status takes precedence over a stale `completed` flag so a
    /// record is never counted as both completed and skipped.
    pub fn is_completed(&self) -> bool {
        match self.status {
            Some(ExerciseStatus::Completed) => true,
            Some(ExerciseStatus::Skipped) => false,
            None => self.completed,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.status == Some(ExerciseStatus::Skipped)
    }

    /// Heaviest load recorded on this record.
    ///
    /// Uses the per-set breakdown when present and non-empty, otherwise the
    /// scalar `weight`.
    pub fn effective_weight(&self) -> u32 {
        match self.set_data.as_deref() {
            Some(sets) if !sets.is_empty() => {
                sets.iter().map(SetEntry::weight_kg).max().unwrap_or(0)
            }
            _ => self.weight,
        }
    }
}

impl From<&ExerciseTemplate> for ExerciseRecord {
    fn from(template: &ExerciseTemplate) -> Self {
        Self::from_template(template)
    }
}
