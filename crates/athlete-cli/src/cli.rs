//! Command handlers for the athlete CLI.
//!
//! [`Cli`] owns the tracker and the renderer. Each handler turns clap
//! arguments into core parameters, calls the tracker and renders the
//! markdown result.

use std::fs;

use anyhow::{Context, Result};
use athlete_core::{
    catalog::{category_names, entries_for_category},
    display::{
        CatalogListing, CategoryTemplates, CurrentExercise, DaySummaries, DayView,
        OperationStatus, SessionView, WorkoutFinished,
    },
    models::{SessionArchive, SessionType},
    params::PlanSession,
    store::SessionStore,
    ExerciseField, Navigation, Tracker, TrackerError, WorkoutSession,
};
use jiff::{civil::Date, Zoned};
use log::debug;

use crate::{
    args::{
        BestsArgs, CatalogArgs, Commands, ExportArgs, ImportArgs, PlanArgs, ShowArgs,
        SummaryArgs, WorkoutAction, WorkoutArgs,
    },
    renderer::TerminalRenderer,
};

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Canonical catalog spelling of a category name, matched case-insensitively.
fn resolve_category(name: &str) -> Result<&'static str, TrackerError> {
    category_names()
        .find(|known| known.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| TrackerError::UnknownCategory(name.to_string()))
}

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub fn handle_command(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Catalog(args) => self.catalog(args),
            Commands::Plan(args) => self.plan(args),
            Commands::Show(args) => self.show(args),
            Commands::Workout(args) => self.workout(args),
            Commands::Bests(args) => self.bests(args),
            Commands::Summary(args) => self.summary(args),
            Commands::Export(args) => self.export(args),
            Commands::Import(args) => self.import(args),
        }
    }

    /// Renders both sessions of a date.
    pub fn show_day(&self, date: Date) -> Result<()> {
        let day = self.tracker.load_day(date);
        self.renderer.render(&DayView { date, day: &day }.to_string())
    }

    fn catalog(&self, args: CatalogArgs) -> Result<()> {
        let Some(name) = args.category else {
            return self.renderer.render(&CatalogListing.to_string());
        };

        let category = resolve_category(&name)?;
        let entries = entries_for_category(category)
            .ok_or_else(|| TrackerError::UnknownCategory(name.clone()))?;
        self.renderer
            .render(&CategoryTemplates { category, entries }.to_string())
    }

    fn plan(&mut self, args: PlanArgs) -> Result<()> {
        let date = args.date.unwrap_or_else(today);
        let session_type = SessionType::from(args.session);

        let day = match args.group {
            Some(group) => self.tracker.plan_group(date, session_type, &group)?,
            None => {
                let categories = args
                    .categories
                    .iter()
                    .map(|name| resolve_category(name))
                    .collect::<Result<Vec<_>, _>>()?;
                self.tracker
                    .plan_session(&PlanSession::new(date, session_type, categories))?
            }
        };

        let status =
            OperationStatus::success(format!("Planned the {session_type} session of {date}"));
        self.renderer.render(&format!(
            "{status}\n{}",
            SessionView::new(&day, session_type)
        ))
    }

    fn show(&self, args: ShowArgs) -> Result<()> {
        let date = args.date.unwrap_or_else(today);
        match args.session {
            Some(session) => {
                let day = self.tracker.load_day(date);
                let view = SessionView::new(&day, session.into());
                self.renderer.render(&view.to_string())
            }
            None => self.show_day(date),
        }
    }

    fn workout(&mut self, args: WorkoutArgs) -> Result<()> {
        let date = args.date.unwrap_or_else(today);
        let session_type = SessionType::from(args.session);
        let window = self.tracker.season_window_months();

        let mut workout = self.tracker.workout(date, session_type);
        match args.at {
            Some(position) => workout.navigate(Navigation::Jump(position as usize - 1)),
            None => workout.resume(),
        }
        debug!("Workout on {date} opened at position {}", workout.index());

        let mut output = String::new();
        match args.action.unwrap_or(WorkoutAction::Current) {
            WorkoutAction::Current => {}
            WorkoutAction::Set { field, value } => {
                let field = ExerciseField::from(field);
                workout.set_field(field, &value)?;
                let status = OperationStatus::success(format!("Set {field} to {value}"));
                output.push_str(&status.to_string());
            }
            WorkoutAction::Complete(dials) => {
                for (field, value) in dials.staged() {
                    workout.stage(field, value)?;
                }
                let name = current_name(&workout)?;
                workout.complete()?;
                let status = OperationStatus::success(format!("Completed {name}"));
                output.push_str(&status.to_string());
            }
            WorkoutAction::Skip => {
                let name = current_name(&workout)?;
                workout.skip()?;
                let status = OperationStatus::success(format!("Skipped {name}"));
                output.push_str(&status.to_string());
            }
            WorkoutAction::Delete => {
                let removed = workout.delete()?;
                let status = OperationStatus::success(format!("Deleted {}", removed.name));
                output.push_str(&status.to_string());
            }
            WorkoutAction::Duplicate => {
                workout.add_following()?;
                let status = OperationStatus::success("Added a following exercise");
                output.push_str(&status.to_string());
            }
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&workout_view(&workout, window)?);
        self.renderer.render(&output)
    }

    fn bests(&self, args: BestsArgs) -> Result<()> {
        let query = args.into_query(today(), self.tracker.season_window_months());
        let bests = self.tracker.bests(&query)?;
        self.renderer.render(&format!(
            "# {}\n\nAs of {}, season of {} months\n\n{bests}",
            query.name, query.as_of, query.window_months
        ))
    }

    fn summary(&self, args: SummaryArgs) -> Result<()> {
        let summaries = self.tracker.summarize(&args.into())?;
        self.renderer.render(&DaySummaries(summaries).to_string())
    }

    fn export(&self, args: ExportArgs) -> Result<()> {
        let archive = self.tracker.export()?;
        let json =
            serde_json::to_string_pretty(&archive).context("Failed to serialize sessions")?;

        match args.output {
            Some(path) => {
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let status = OperationStatus::success(format!(
                    "Exported {} dates to {}",
                    archive.len(),
                    path.display()
                ));
                self.renderer.render(&status.to_string())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    fn import(&mut self, args: ImportArgs) -> Result<()> {
        let raw = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let archive: SessionArchive = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a session export", args.file.display()))?;

        let written = self.tracker.import(&archive)?;
        let status = OperationStatus::success(format!("Imported {written} dates"));
        self.renderer.render(&status.to_string())
    }
}

fn current_name<S: SessionStore>(workout: &WorkoutSession<'_, S>) -> Result<String> {
    workout
        .current()
        .map(|exercise| exercise.record.name.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "The {} workout of {} is already finished",
                workout.session_type(),
                workout.date()
            )
        })
}

fn workout_view<S: SessionStore>(workout: &WorkoutSession<'_, S>, window: u32) -> Result<String> {
    let progress = workout.position();
    let Some(exercise) = workout.current() else {
        return Ok(WorkoutFinished {
            session_type: workout.session_type(),
            progress,
        }
        .to_string());
    };

    let bests = workout.current_bests(workout.date(), window)?;
    Ok(CurrentExercise {
        exercise,
        progress,
        dials: *workout.dials(),
        bests,
    }
    .to_string())
}
