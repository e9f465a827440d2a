//! Planning sessions from catalog categories.

use jiff::civil::Date;
use log::{info, warn};

use super::Tracker;
use crate::{
    catalog::{categories_in_group, templates_for_category},
    error::{Result, TrackerError},
    models::{CategoryBlock, DaySessions, ExerciseRecord, SessionType},
    params::PlanSession,
    store::SessionStore,
};

impl<S: SessionStore> Tracker<S> {
    /// Replaces one session of a date with fresh blocks for the named
    /// categories and persists the whole day.
    ///
    /// Blocks follow the requested order and start untouched. A category
    /// named twice is planned once. Names missing from the catalog
    /// contribute nothing. The other session of the day is kept as stored.
    pub fn plan_session(&mut self, params: &PlanSession) -> Result<DaySessions> {
        let mut day = self.store.load(params.date);

        let mut blocks: Vec<CategoryBlock> = Vec::with_capacity(params.categories.len());
        for name in &params.categories {
            if blocks.iter().any(|block| &block.category == name) {
                continue;
            }
            let exercises: Vec<ExerciseRecord> = templates_for_category(name)
                .iter()
                .map(ExerciseRecord::from_template)
                .collect();
            if exercises.is_empty() {
                warn!("Category {name:?} is not in the catalog; planning nothing for it");
                continue;
            }
            blocks.push(CategoryBlock::new(name.as_str(), exercises));
        }

        *day.session_mut(params.session_type) = blocks;
        self.store.save(params.date, &day)?;

        info!(
            "Planned {} {} categories for {}",
            day.session(params.session_type).len(),
            params.session_type,
            params.date
        );
        Ok(day)
    }

    /// Plans every category of a catalog group.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::UnknownGroup` when no group has that name.
    pub fn plan_group(
        &mut self,
        date: Date,
        session_type: SessionType,
        group: &str,
    ) -> Result<DaySessions> {
        let categories = categories_in_group(group)
            .ok_or_else(|| TrackerError::UnknownGroup(group.to_string()))?;
        self.plan_session(&PlanSession::new(
            date,
            session_type,
            categories.iter().copied(),
        ))
    }

    /// Removes every category from one session of a date.
    pub fn clear_session(&mut self, date: Date, session_type: SessionType) -> Result<DaySessions> {
        let mut day = self.store.load(date);
        day.session_mut(session_type).clear();
        self.store.save(date, &day)?;
        info!("Cleared the {session_type} session of {date}");
        Ok(day)
    }
}
