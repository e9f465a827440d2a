//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, keeping clap out of `athlete-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use athlete_core::{
    models::SessionType,
    mutator::ExerciseField,
    params::{BestsQuery, SummaryRange},
};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;

/// Plan and log morning and evening training sessions
///
/// Sessions are planned from a fixed catalog of exercise categories, worked
/// through one exercise at a time, and mined for personal and season bests.
#[derive(Parser)]
#[command(version, about, name = "athlete")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/athlete/sessions.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, today's sessions are shown.
#[derive(Subcommand)]
pub enum Commands {
    /// List catalog categories, or the exercises of one category
    #[command(alias = "c")]
    Catalog(CatalogArgs),
    /// Plan a session from catalog categories
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Show both sessions of a date
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Step through a session one exercise at a time
    #[command(alias = "w")]
    Workout(WorkoutArgs),
    /// Personal and season best weights for an exercise
    #[command(alias = "b")]
    Bests(BestsArgs),
    /// Completion statistics per stored date
    Summary(SummaryArgs),
    /// Write every stored date as JSON
    Export(ExportArgs),
    /// Load dates from a JSON export, overwriting stored dates
    Import(ImportArgs),
}

/// Morning or evening session
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SessionArg {
    #[value(alias = "am")]
    Morning,
    #[value(alias = "pm")]
    Evening,
}

impl From<SessionArg> for SessionType {
    fn from(val: SessionArg) -> Self {
        match val {
            SessionArg::Morning => SessionType::Morning,
            SessionArg::Evening => SessionType::Evening,
        }
    }
}

/// Editable exercise field
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FieldArg {
    Sets,
    Reps,
    Weight,
    Duration,
    Notes,
}

impl From<FieldArg> for ExerciseField {
    fn from(val: FieldArg) -> Self {
        match val {
            FieldArg::Sets => ExerciseField::Sets,
            FieldArg::Reps => ExerciseField::Reps,
            FieldArg::Weight => ExerciseField::Weight,
            FieldArg::Duration => ExerciseField::Duration,
            FieldArg::Notes => ExerciseField::Notes,
        }
    }
}

#[derive(ClapArgs)]
pub struct CatalogArgs {
    /// Category whose exercises to list
    pub category: Option<String>,
}

#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Session to plan
    #[arg(value_enum)]
    pub session: SessionArg,

    /// Categories in the order they should be performed
    #[arg(required_unless_present = "group")]
    pub categories: Vec<String>,

    /// Plan every category of a catalog group instead
    #[arg(long, short, conflicts_with = "categories")]
    pub group: Option<String>,

    /// Date to plan (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<Date>,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Date to show (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<Date>,

    /// Only show one session
    #[arg(long, short, value_enum)]
    pub session: Option<SessionArg>,
}

#[derive(ClapArgs)]
pub struct WorkoutArgs {
    /// Session to work through
    #[arg(value_enum)]
    pub session: SessionArg,

    /// Date of the session (YYYY-MM-DD), defaults to today
    #[arg(long, short, global = true)]
    pub date: Option<Date>,

    /// 1-based exercise position; defaults to the first pending exercise
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub at: Option<u32>,

    #[command(subcommand)]
    pub action: Option<WorkoutAction>,
}

/// Actions on the current exercise. Without one, it is shown.
#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Show the current exercise
    Current,
    /// Write one field of the current exercise
    Set {
        #[arg(value_enum)]
        field: FieldArg,
        value: String,
    },
    /// Mark the current exercise completed and move on
    Complete(DialArgs),
    /// Skip the current exercise and move on
    Skip,
    /// Remove the current exercise
    Delete,
    /// Add a fresh copy of the current exercise after it
    #[command(alias = "add")]
    Duplicate,
}

/// Values to record when completing; unset dials keep the exercise's values
#[derive(ClapArgs)]
pub struct DialArgs {
    #[arg(long)]
    pub sets: Option<u32>,
    #[arg(long)]
    pub reps: Option<u32>,
    #[arg(long)]
    pub weight: Option<u32>,
    #[arg(long)]
    pub duration: Option<u32>,
}

impl DialArgs {
    /// Dials the user set explicitly.
    pub fn staged(&self) -> Vec<(ExerciseField, u32)> {
        [
            (ExerciseField::Sets, self.sets),
            (ExerciseField::Reps, self.reps),
            (ExerciseField::Weight, self.weight),
            (ExerciseField::Duration, self.duration),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(ClapArgs)]
pub struct BestsArgs {
    /// Exercise name, matched exactly
    pub name: String,

    /// Last day of the season window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub as_of: Option<Date>,

    /// Season window in months
    #[arg(long, short)]
    pub window: Option<u32>,
}

impl BestsArgs {
    pub fn into_query(self, today: Date, default_window: u32) -> BestsQuery {
        BestsQuery::new(self.name, self.as_of.unwrap_or(today))
            .with_window(self.window.unwrap_or(default_window))
    }
}

#[derive(ClapArgs)]
pub struct SummaryArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<Date>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<Date>,
}

impl From<SummaryArgs> for SummaryRange {
    fn from(val: SummaryArgs) -> Self {
        SummaryRange {
            from: val.from,
            to: val.to,
        }
    }
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    /// File to write; prints to stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ImportArgs {
    /// JSON export to load
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_workout_complete() {
        let args = Args::try_parse_from([
            "athlete",
            "workout",
            "pm",
            "--date",
            "2024-06-01",
            "complete",
            "--weight",
            "90",
        ])
        .unwrap();

        let Some(Commands::Workout(workout)) = args.command else {
            panic!("expected workout command");
        };
        assert!(matches!(workout.session, SessionArg::Evening));
        assert_eq!(workout.date, Some(jiff::civil::date(2024, 6, 1)));
        let Some(WorkoutAction::Complete(dials)) = workout.action else {
            panic!("expected complete action");
        };
        assert_eq!(dials.staged(), vec![(ExerciseField::Weight, 90)]);
    }

    #[test]
    fn test_plan_requires_categories_or_group() {
        assert!(Args::try_parse_from(["athlete", "plan", "morning"]).is_err());
        assert!(Args::try_parse_from(["athlete", "plan", "morning", "--group", "Speed"]).is_ok());
        assert!(Args::try_parse_from(["athlete", "plan", "morning", "Core"]).is_ok());
    }
}
