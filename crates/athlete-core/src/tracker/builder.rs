//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Tracker;
use crate::{
    bests::DEFAULT_SEASON_WINDOW_MONTHS,
    db::Database,
    error::{Result, TrackerError},
};

/// Builder for a [`Tracker`] backed by the SQLite store.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    season_window_months: u32,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            season_window_months: DEFAULT_SEASON_WINDOW_MONTHS,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/athlete/sessions.db` or
    /// `~/.local/share/athlete/sessions.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the default season-best window in months.
    pub fn with_season_window(mut self, months: u32) -> Self {
        self.season_window_months = months;
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created, `TrackerError::XdgDirectory` if no default location can be
    /// resolved and `TrackerError::Database` if database initialization fails
    pub fn build(self) -> Result<Tracker<Database>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening session database at {}", db_path.display());
        let database = Database::new(&db_path)?;
        Ok(Tracker::with_store(database).with_season_window(self.season_window_months))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("athlete")
            .place_data_file("sessions.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
