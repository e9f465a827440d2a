//! Bests, summaries and archive exchange across all stored dates.

use jiff::civil::Date;
use log::{info, warn};

use super::Tracker;
use crate::{
    aggregate::flatten,
    bests::bests,
    error::Result,
    models::{Bests, DaySummary, SessionArchive, SessionType},
    params::{BestsQuery, SummaryRange},
    store::SessionStore,
};

impl<S: SessionStore> Tracker<S> {
    /// Personal and season bests for one exercise name.
    pub fn bests(&self, query: &BestsQuery) -> Result<Bests> {
        bests(&self.store, &query.name, query.as_of, query.window_months)
    }

    /// Bests using the tracker's configured season window.
    pub fn bests_for(&self, name: &str, as_of: Date) -> Result<Bests> {
        bests(&self.store, name, as_of, self.season_window_months)
    }

    /// Morning and evening statistics for every stored date in `range`,
    /// oldest first. Unreadable dates are logged and left out.
    pub fn summarize(&self, range: &SummaryRange) -> Result<Vec<DaySummary>> {
        let mut summaries = Vec::new();
        for date in self.store.list_dates()? {
            if !range.contains(date) {
                continue;
            }
            let day = match self.store.try_load(date) {
                Ok(Some(day)) => day,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Leaving {date} out of the summary: {e}");
                    continue;
                }
            };
            summaries.push(DaySummary {
                date,
                morning: flatten(&day, SessionType::Morning).stats(),
                evening: flatten(&day, SessionType::Evening).stats(),
            });
        }
        Ok(summaries)
    }

    /// Every readable stored date and its sessions.
    pub fn export(&self) -> Result<SessionArchive> {
        let mut archive = SessionArchive::default();
        for date in self.store.list_dates()? {
            match self.store.try_load(date) {
                Ok(Some(day)) => {
                    archive.0.insert(date, day);
                }
                Ok(None) => {}
                Err(e) => warn!("Leaving {date} out of the export: {e}"),
            }
        }
        info!("Exported {} dates", archive.len());
        Ok(archive)
    }

    /// Writes every date of an archive, overwriting what is stored for it.
    ///
    /// Returns the number of dates written. Stops at the first failed write;
    /// dates written before it stay written.
    pub fn import(&mut self, archive: &SessionArchive) -> Result<usize> {
        for (date, day) in &archive.0 {
            self.store.save(*date, day)?;
        }
        info!("Imported {} dates", archive.len());
        Ok(archive.len())
    }
}
