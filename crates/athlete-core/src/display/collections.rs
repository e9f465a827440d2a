//! Wrapper types for displaying sessions, days and catalog listings.
//!
//! Each wrapper borrows what it shows and handles the empty case itself.

use std::fmt;

use jiff::civil::Date;

use super::datetime::DayHeading;
use crate::{
    aggregate::flatten,
    catalog::{category_groups, emoji_for, CatalogEntry},
    models::{CategoryBlock, DaySessions, DaySummary, SessionType},
};

/// One session of a day with its statistics line.
///
/// # Examples
///
/// ```rust
/// use athlete_core::{
///     display::SessionView,
///     models::{CategoryBlock, DaySessions, ExerciseRecord, SessionType},
/// };
///
/// let day = DaySessions {
///     morning: vec![CategoryBlock::new(
///         "Core",
///         vec![ExerciseRecord { name: "Planks".to_string(), ..Default::default() }],
///     )],
///     evening: vec![],
/// };
///
/// let output = SessionView::new(&day, SessionType::Morning).to_string();
/// assert!(output.contains("## ☀️ Morning"));
/// assert!(output.contains("Planks"));
/// ```
pub struct SessionView<'a> {
    pub day: &'a DaySessions,
    pub session_type: SessionType,
}

impl<'a> SessionView<'a> {
    pub fn new(day: &'a DaySessions, session_type: SessionType) -> Self {
        Self { day, session_type }
    }
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.session_type.with_icon())?;
        writeln!(f)?;

        let blocks = self.day.session(self.session_type);
        if blocks.is_empty() {
            return writeln!(f, "No session planned.\n");
        }

        writeln!(f, "{}", flatten(self.day, self.session_type).stats())?;
        writeln!(f)?;
        for block in blocks {
            write!(f, "{}", CategorySection(block))?;
        }
        Ok(())
    }
}

/// A category block nested one heading level below its session.
struct CategorySection<'a>(&'a CategoryBlock);

impl fmt::Display for CategorySection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = self.0;
        writeln!(f, "**{}** ({} exercises)", block.category, block.exercises.len())?;
        writeln!(f)?;
        for exercise in &block.exercises {
            write!(f, "{exercise}")?;
        }
        Ok(())
    }
}

/// Both sessions of a date under a date heading.
pub struct DayView<'a> {
    pub date: Date,
    pub day: &'a DaySessions,
}

impl fmt::Display for DayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", DayHeading(self.date))?;
        writeln!(f)?;
        for session_type in SessionType::ALL {
            write!(f, "{}", SessionView::new(self.day, session_type))?;
        }
        Ok(())
    }
}

/// Per-date statistics, oldest first.
pub struct DaySummaries(pub Vec<DaySummary>);

impl DaySummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for DaySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No sessions stored.");
        }
        writeln!(f, "# Training summary")?;
        writeln!(f)?;
        for summary in &self.0 {
            writeln!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Category names grouped the way the planner offers them.
pub struct CatalogListing;

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Exercise categories")?;
        for (group, categories) in category_groups() {
            writeln!(f)?;
            writeln!(f, "## {group}")?;
            writeln!(f)?;
            for category in *categories {
                writeln!(f, "- {category}")?;
            }
        }
        Ok(())
    }
}

/// The exercises a catalog category plans.
pub struct CategoryTemplates<'a> {
    pub category: &'a str,
    pub entries: &'a [CatalogEntry],
}

impl fmt::Display for CategoryTemplates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.category)?;
        writeln!(f)?;
        for entry in self.entries {
            write!(
                f,
                "- {} **{}**: {} × {}",
                emoji_for(entry.name),
                entry.name,
                entry.sets,
                entry.reps
            )?;
            if entry.weight > 0 {
                write!(f, " @ {} kg", entry.weight)?;
            }
            if entry.duration > 0 {
                write!(f, ", {} min", entry.duration)?;
            }
            if !entry.notes.is_empty() {
                write!(f, " ({})", entry.notes)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
