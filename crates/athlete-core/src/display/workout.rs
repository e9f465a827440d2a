//! Workout-mode views: the current exercise card and the finished screen.

use std::fmt;

use crate::{
    aggregate::FlatExercise,
    models::{Bests, Progress, SessionType},
    mutator::DialValues,
};

/// The exercise under the cursor with progress, staged dials and bests.
pub struct CurrentExercise<'a> {
    pub exercise: FlatExercise<'a>,
    pub progress: Progress,
    pub dials: DialValues,
    pub bests: Option<Bests>,
}

impl fmt::Display for CurrentExercise<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}** • {}", self.exercise.category, self.progress)?;
        writeln!(f)?;
        write!(f, "{}", self.exercise.record)?;

        let dials = &self.dials;
        writeln!(
            f,
            "Dials: {} sets • {} reps • {} kg • {} min",
            dials.sets, dials.reps, dials.weight, dials.duration
        )?;

        if let Some(bests) = &self.bests {
            writeln!(f)?;
            write!(f, "{bests}")?;
        }
        Ok(())
    }
}

/// Terminal state shown once the cursor moved past the last exercise.
pub struct WorkoutFinished {
    pub session_type: SessionType,
    pub progress: Progress,
}

impl fmt::Display for WorkoutFinished {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.progress.stats;
        if stats.total == 0 {
            return writeln!(f, "No {} session planned.", self.session_type);
        }
        writeln!(f, "# 🎉 {} workout complete", self.session_type.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- Completed: {}", stats.completed)?;
        writeln!(f, "- Skipped: {}", stats.skipped)?;
        writeln!(f, "- Total: {}", stats.total)
    }
}
