//! Flattened views over a session and positional navigation.
//!
//! Workout mode walks one session as a single ordered list: every category
//! block in stored order, each contributing its exercises in stored order.
//! [`flatten`] builds that view without copying anything, and [`navigate`]
//! moves an integer cursor over it.

use crate::models::{CategoryBlock, DaySessions, ExerciseRecord, SessionStats, SessionType};

/// One exercise of a flattened session together with where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatExercise<'a> {
    pub record: &'a ExerciseRecord,
    pub category: &'a str,
    pub category_index: usize,
    pub exercise_index: usize,
}

/// Borrowed, restartable flattened view of one session.
///
/// Iterating twice always yields the same order; the view never reorders,
/// filters or deduplicates.
#[derive(Debug, Clone, Copy)]
pub struct Flattened<'a> {
    blocks: &'a [CategoryBlock],
}

impl<'a> Flattened<'a> {
    /// Lazily walks every exercise in session order.
    pub fn iter(&self) -> impl Iterator<Item = FlatExercise<'a>> + 'a {
        let blocks = self.blocks;
        blocks
            .iter()
            .enumerate()
            .flat_map(|(category_index, block)| {
                block
                    .exercises
                    .iter()
                    .enumerate()
                    .map(move |(exercise_index, record)| FlatExercise {
                        record,
                        category: &block.category,
                        category_index,
                        exercise_index,
                    })
            })
    }

    /// Total number of exercises across all blocks.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|block| block.exercises.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exercise at a flattened position.
    ///
    /// `None` past the end is the "no current exercise" signal workout mode
    /// uses for its finished state.
    pub fn get(&self, index: usize) -> Option<FlatExercise<'a>> {
        self.iter().nth(index)
    }

    /// Flattened position of a block/exercise pair.
    pub fn position_of(&self, category_index: usize, exercise_index: usize) -> Option<usize> {
        let block = self.blocks.get(category_index)?;
        if exercise_index >= block.exercises.len() {
            return None;
        }
        let before: usize = self.blocks[..category_index]
            .iter()
            .map(|block| block.exercises.len())
            .sum();
        Some(before + exercise_index)
    }

    /// Completion statistics of the session.
    pub fn stats(&self) -> SessionStats {
        stats(self.iter())
    }
}

impl<'a> IntoIterator for Flattened<'a> {
    type Item = FlatExercise<'a>;
    type IntoIter = Box<dyn Iterator<Item = FlatExercise<'a>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Flattened view of one session of a day.
pub fn flatten(day: &DaySessions, session_type: SessionType) -> Flattened<'_> {
    Flattened {
        blocks: day.session(session_type),
    }
}

/// Counts total, completed and skipped exercises.
///
/// A record counts as completed when its status is completed or, with no
/// status, its `completed` flag is set. Skipped status always wins, so
/// `completed + skipped <= total` holds for any input.
pub fn stats<'a, I>(exercises: I) -> SessionStats
where
    I: IntoIterator<Item = FlatExercise<'a>>,
{
    exercises
        .into_iter()
        .fold(SessionStats::default(), |mut acc, exercise| {
            acc.total += 1;
            if exercise.record.is_skipped() {
                acc.skipped += 1;
            } else if exercise.record.is_completed() {
                acc.completed += 1;
            }
            acc
        })
}

/// A cursor movement in workout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// One step back, stopping at the first exercise
    Previous,
    /// One step forward, stopping at the last exercise
    Next,
    /// One step forward, allowed to move one past the last exercise
    Advance,
    /// Straight to a position, clamped into the session
    Jump(usize),
}

/// Applies a cursor movement over a session of `len` exercises.
///
/// Every movement except [`Navigation::Advance`] clamps into
/// `[0, len - 1]`. `Advance` is what completing or skipping uses: it stops at
/// `len`, the position with no exercise that marks the workout as finished.
///
/// ```rust
/// use athlete_core::aggregate::{navigate, Navigation};
///
/// assert_eq!(navigate(0, 3, Navigation::Previous), 0);
/// assert_eq!(navigate(2, 3, Navigation::Next), 2);
/// assert_eq!(navigate(2, 3, Navigation::Advance), 3);
/// assert_eq!(navigate(3, 3, Navigation::Advance), 3);
/// assert_eq!(navigate(0, 3, Navigation::Jump(10)), 2);
/// ```
pub fn navigate(index: usize, len: usize, movement: Navigation) -> usize {
    let last = len.saturating_sub(1);
    match movement {
        Navigation::Previous => index.saturating_sub(1).min(last),
        Navigation::Next => index.saturating_add(1).min(last),
        Navigation::Advance => index.saturating_add(1).min(len),
        Navigation::Jump(target) => target.min(last),
    }
}

/// Re-clamps a cursor after the session shrank, never below 0.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExerciseStatus;

    fn record(name: &str) -> ExerciseRecord {
        ExerciseRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn sample_day() -> DaySessions {
        DaySessions {
            morning: vec![
                CategoryBlock::new("Warm Up", vec![record("Light Jog"), record("Leg Swings")]),
                CategoryBlock::new("Empty", vec![]),
                CategoryBlock::new(
                    "Core",
                    vec![record("Planks"), record("Dead Bugs"), record("Leg Raises")],
                ),
            ],
            evening: vec![CategoryBlock::new("Sprints", vec![record("Hill Sprints")])],
        }
    }

    #[test]
    fn test_flatten_order_and_locations() {
        let day = sample_day();
        let flat = flatten(&day, SessionType::Morning);

        let seen: Vec<(&str, &str, usize, usize)> = flat
            .iter()
            .map(|e| (e.record.name.as_str(), e.category, e.category_index, e.exercise_index))
            .collect();

        assert_eq!(
            seen,
            vec![
                ("Light Jog", "Warm Up", 0, 0),
                ("Leg Swings", "Warm Up", 0, 1),
                ("Planks", "Core", 2, 0),
                ("Dead Bugs", "Core", 2, 1),
                ("Leg Raises", "Core", 2, 2),
            ]
        );
    }

    #[test]
    fn test_flatten_length_matches_block_sum() {
        let day = sample_day();
        for session_type in SessionType::ALL {
            let expected: usize = day
                .session(session_type)
                .iter()
                .map(|b| b.exercises.len())
                .sum();
            let flat = flatten(&day, session_type);
            assert_eq!(flat.len(), expected);
            assert_eq!(flat.iter().count(), expected);
        }
    }

    #[test]
    fn test_flatten_is_restartable() {
        let day = sample_day();
        let flat = flatten(&day, SessionType::Morning);
        let first: Vec<FlatExercise<'_>> = flat.iter().collect();
        let second: Vec<FlatExercise<'_>> = flat.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_and_position_of() {
        let day = sample_day();
        let flat = flatten(&day, SessionType::Morning);

        assert_eq!(flat.get(2).unwrap().record.name, "Planks");
        assert!(flat.get(5).is_none());
        assert_eq!(flat.position_of(2, 1), Some(3));
        assert_eq!(flat.position_of(1, 0), None);
        assert_eq!(flat.position_of(9, 0), None);
    }

    #[test]
    fn test_stats_counts() {
        let mut day = sample_day();
        let core = &mut day.morning[2].exercises;
        core[0].completed = true;
        core[1].status = Some(ExerciseStatus::Completed);
        core[2].status = Some(ExerciseStatus::Skipped);

        let stats = flatten(&day, SessionType::Morning).stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.remaining(), 2);
    }

    #[test]
    fn test_stats_never_double_counts() {
        let mut day = sample_day();
        let jog = &mut day.morning[0].exercises[0];
        jog.completed = true;
        jog.status = Some(ExerciseStatus::Skipped);

        let stats = flatten(&day, SessionType::Morning).stats();
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.skipped, 1);
        assert!(stats.completed + stats.skipped <= stats.total);
    }

    #[test]
    fn test_empty_session() {
        let day = DaySessions::default();
        let flat = flatten(&day, SessionType::Evening);
        assert!(flat.is_empty());
        assert_eq!(flat.stats(), SessionStats::default());
        assert_eq!(navigate(0, 0, Navigation::Next), 0);
        assert_eq!(navigate(0, 0, Navigation::Advance), 0);
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(4, 3), 2);
        assert_eq!(clamp_index(1, 3), 1);
        assert_eq!(clamp_index(0, 0), 0);
    }
}
