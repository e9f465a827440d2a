//! Completion statistics, progress, bests and per-day summaries.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::DaySessions;

/// Completion counts over a flattened session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStats {
    /// Number of exercises in the session
    pub total: usize,
    /// Number of exercises marked completed
    pub completed: usize,
    /// Number of exercises skipped
    pub skipped: usize,
}

impl SessionStats {
    /// Exercises neither completed nor skipped.
    pub fn remaining(&self) -> usize {
        self.total
            .saturating_sub(self.completed)
            .saturating_sub(self.skipped)
    }
}

/// Workout-mode progress: the 1-based cursor position plus session stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current exercise, `total + 1` once finished
    pub current: usize,
    #[serde(flatten)]
    pub stats: SessionStats,
}

impl Progress {
    /// Share of the session the cursor has reached, in percent.
    pub fn percent(&self) -> f64 {
        if self.stats.total == 0 {
            return 0.0;
        }
        (self.current.min(self.stats.total) as f64 / self.stats.total as f64) * 100.0
    }
}

/// Personal and season best weights for one exercise name.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Bests {
    /// Heaviest weight ever recorded, `None` when nothing above 0 kg exists
    pub personal_best: Option<u32>,
    /// Heaviest weight recorded inside the season window
    pub season_best: Option<u32>,
}

/// Morning and evening statistics for one stored date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySummary {
    pub date: Date,
    pub morning: SessionStats,
    pub evening: SessionStats,
}

/// Every stored date and its record, as exchanged by export and import.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SessionArchive(pub BTreeMap<Date, DaySessions>);

impl SessionArchive {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
