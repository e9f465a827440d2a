//! Parameter structures for tracker operations.
//!
//! These structures are shared by every front end without carrying any
//! framework-specific derives. The CLI builds them from its clap arguments
//! and hands them to [`crate::Tracker`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │
//! └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{bests::DEFAULT_SEASON_WINDOW_MONTHS, models::SessionType};

/// Parameters for planning a session from catalog categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSession {
    /// Calendar date the session belongs to
    pub date: Date,
    /// Morning or evening
    pub session_type: SessionType,
    /// Category names in the order they should be performed
    pub categories: Vec<String>,
}

impl PlanSession {
    pub fn new<I, C>(date: Date, session_type: SessionType, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            date,
            session_type,
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parameters for a personal-best and season-best lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestsQuery {
    /// Exercise name, matched exactly
    pub name: String,
    /// Last day of the season window
    pub as_of: Date,
    /// Season window length in months
    #[serde(default = "default_window")]
    pub window_months: u32,
}

impl BestsQuery {
    pub fn new(name: impl Into<String>, as_of: Date) -> Self {
        Self {
            name: name.into(),
            as_of,
            window_months: DEFAULT_SEASON_WINDOW_MONTHS,
        }
    }

    pub fn with_window(mut self, window_months: u32) -> Self {
        self.window_months = window_months;
        self
    }
}

fn default_window() -> u32 {
    DEFAULT_SEASON_WINDOW_MONTHS
}

/// Inclusive date range for summaries; open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRange {
    #[serde(default)]
    pub from: Option<Date>,
    #[serde(default)]
    pub to: Option<Date>,
}

impl SummaryRange {
    /// Whether `date` falls inside the range.
    pub fn contains(&self, date: Date) -> bool {
        self.from.map_or(true, |from| from <= date) && self.to.map_or(true, |to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_summary_range_bounds() {
        let open = SummaryRange::default();
        assert!(open.contains(date(1999, 1, 1)));

        let range = SummaryRange {
            from: Some(date(2024, 1, 1)),
            to: Some(date(2024, 1, 31)),
        };
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert!(!range.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_bests_query_defaults_window() {
        let query: BestsQuery =
            serde_json::from_str(r#"{"name": "Squats", "as_of": "2024-06-01"}"#).unwrap();
        assert_eq!(query.window_months, DEFAULT_SEASON_WINDOW_MONTHS);
        assert_eq!(query, BestsQuery::new("Squats", date(2024, 6, 1)));
    }
}
