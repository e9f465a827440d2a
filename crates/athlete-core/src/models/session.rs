//! Category blocks and the per-date session record.

use serde::{Deserialize, Serialize};

use super::{ExerciseRecord, SessionType};

/// A named group of exercises planned into a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBlock {
    /// Category name, unique within a session
    pub category: String,

    /// Exercises in the order they are performed
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

impl CategoryBlock {
    pub fn new(category: impl Into<String>, exercises: Vec<ExerciseRecord>) -> Self {
        Self {
            category: category.into(),
            exercises,
        }
    }
}

/// Everything planned for one calendar date.
///
/// This is the unit of persistence: a date's entry always holds the whole
/// record, never a single session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySessions {
    #[serde(default)]
    pub morning: Vec<CategoryBlock>,

    #[serde(default)]
    pub evening: Vec<CategoryBlock>,
}

impl DaySessions {
    /// Category blocks of one session.
    pub fn session(&self, session_type: SessionType) -> &[CategoryBlock] {
        match session_type {
            SessionType::Morning => &self.morning,
            SessionType::Evening => &self.evening,
        }
    }

    /// Mutable category blocks of one session.
    pub fn session_mut(&mut self, session_type: SessionType) -> &mut Vec<CategoryBlock> {
        match session_type {
            SessionType::Morning => &mut self.morning,
            SessionType::Evening => &mut self.evening,
        }
    }

    /// True when neither session has any category planned.
    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.evening.is_empty()
    }

    /// Iterates every record of both sessions.
    pub fn records(&self) -> impl Iterator<Item = &ExerciseRecord> {
        self.morning
            .iter()
            .chain(&self.evening)
            .flat_map(|block| &block.exercises)
    }
}
