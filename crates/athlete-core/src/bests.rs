//! Personal-best and season-best weights derived from stored history.
//!
//! Bests are matched by exercise name across every stored date, both
//! sessions and every category. The scan is a plain pass over the store;
//! [`BestsCache`] memoizes results for callers that ask repeatedly.

use std::collections::BTreeMap;

use jiff::{civil::Date, Span};
use log::{debug, warn};

use crate::{error::Result, models::Bests, store::SessionStore};

/// Trailing window, in months, used for season bests unless configured.
pub const DEFAULT_SEASON_WINDOW_MONTHS: u32 = 3;

/// First date inside a season window ending on `as_of`.
///
/// Windows too large to represent reach back to the earliest date.
///
/// ```rust
/// use athlete_core::bests::season_start;
/// use jiff::civil::date;
///
/// assert_eq!(season_start(date(2024, 6, 1), 3), date(2024, 3, 1));
/// assert_eq!(season_start(date(2024, 5, 31), 3), date(2024, 2, 29));
/// ```
pub fn season_start(as_of: Date, window_months: u32) -> Date {
    Span::new()
        .try_months(i64::from(window_months))
        .map(|span| as_of.saturating_sub(span))
        .unwrap_or(Date::MIN)
}

/// Computes personal and season bests for `name` as of a date.
///
/// The season covers `[as_of - window_months, as_of]`, both ends included.
/// A date whose stored entry cannot be read is logged and left out of the
/// scan; only a failure to enumerate the store itself is an error.
///
/// # Errors
///
/// Returns an error when the store cannot list its keys.
pub fn bests<S>(store: &S, name: &str, as_of: Date, window_months: u32) -> Result<Bests>
where
    S: SessionStore + ?Sized,
{
    let cutoff = season_start(as_of, window_months);
    let mut personal = 0;
    let mut season = 0;

    for date in store.list_dates()? {
        let day = match store.try_load(date) {
            Ok(Some(day)) => day,
            Ok(None) => continue,
            Err(e) => {
                warn!("Ignoring {date} while computing bests: {e}");
                continue;
            }
        };

        let heaviest = day
            .records()
            .filter(|record| record.name == name)
            .map(|record| record.effective_weight())
            .max()
            .unwrap_or(0);

        personal = personal.max(heaviest);
        if cutoff <= date && date <= as_of {
            season = season.max(heaviest);
        }
    }

    debug!("Bests for {name:?} as of {as_of}: personal {personal}, season {season}");
    Ok(Bests {
        personal_best: non_zero(personal),
        season_best: non_zero(season),
    })
}

fn non_zero(weight: u32) -> Option<u32> {
    (weight > 0).then_some(weight)
}

/// Memoized [`bests`] lookups keyed on name, date and window.
///
/// Entries never expire on their own; call [`BestsCache::invalidate`] after
/// writing to the store.
#[derive(Debug, Clone, Default)]
pub struct BestsCache {
    entries: BTreeMap<(String, Date, u32), Bests>,
}

impl BestsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached bests, computing and remembering them on a miss.
    pub fn get_or_compute<S>(
        &mut self,
        store: &S,
        name: &str,
        as_of: Date,
        window_months: u32,
    ) -> Result<Bests>
    where
        S: SessionStore + ?Sized,
    {
        let key = (name.to_string(), as_of, window_months);
        if let Some(hit) = self.entries.get(&key) {
            return Ok(*hit);
        }
        let computed = bests(store, name, as_of, window_months)?;
        self.entries.insert(key, computed);
        Ok(computed)
    }

    /// Drops every cached entry.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
