//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data. All
//! output is markdown for rich terminal display.

use std::fmt;

use crate::{
    catalog::emoji_for,
    models::{
        Bests, CategoryBlock, DaySummary, ExerciseRecord, ExerciseStatus, Progress, SessionStats,
        SessionType,
    },
};

impl fmt::Display for ExerciseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ExerciseRecord {
    /// Status shown on the card; a set `completed` flag without a status
    /// still reads as completed.
    fn display_status(&self) -> Option<ExerciseStatus> {
        if self.is_skipped() {
            Some(ExerciseStatus::Skipped)
        } else if self.is_completed() {
            Some(ExerciseStatus::Completed)
        } else {
            None
        }
    }
}

impl fmt::Display for ExerciseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} {} ({})",
            emoji_for(&self.name),
            self.name,
            ExerciseStatus::icon_for(self.display_status())
        )?;
        writeln!(f)?;

        writeln!(f, "- Sets: {}", self.sets)?;
        writeln!(f, "- Reps: {}", self.reps)?;
        if self.weight > 0 {
            writeln!(f, "- Weight: {} kg", self.weight)?;
        }
        if self.duration > 0 {
            writeln!(f, "- Duration: {} min", self.duration)?;
        }

        if let Some(sets) = self.set_data.as_deref().filter(|sets| !sets.is_empty()) {
            writeln!(f, "- Set breakdown:")?;
            for (number, set) in sets.iter().enumerate() {
                writeln!(f, "  {}. {} reps × {} kg", number + 1, set.reps, set.weight_kg())?;
            }
        }

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        writeln!(f)
    }
}

impl fmt::Display for CategoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.category)?;
        writeln!(f)?;
        for exercise in &self.exercises {
            write!(f, "{exercise}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return write!(f, "nothing planned");
        }
        write!(
            f,
            "{} exercises • ✓ {} • ⏭️ {} • ○ {}",
            self.total,
            self.completed,
            self.skipped,
            self.remaining()
        )
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} • ✓ {} • ⏭️ {}",
            self.current.min(self.stats.total),
            self.stats.total,
            self.stats.completed,
            self.stats.skipped
        )
    }
}

fn write_best(f: &mut fmt::Formatter<'_>, label: &str, best: Option<u32>) -> fmt::Result {
    match best {
        Some(weight) => writeln!(f, "- {label}: {weight} kg"),
        None => writeln!(f, "- {label}: none yet"),
    }
}

impl fmt::Display for Bests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_best(f, "🏆 Personal best", self.personal_best)?;
        write_best(f, "📅 Season best", self.season_best)
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.date)?;
        writeln!(f)?;
        writeln!(f, "- {}: {}", SessionType::Morning.with_icon(), self.morning)?;
        writeln!(f, "- {}: {}", SessionType::Evening.with_icon(), self.evening)
    }
}
