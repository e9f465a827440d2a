//! Date-keyed persistence for [`DaySessions`] records.
//!
//! Every backend is a flat key-value map from `athlete-sessions-<YYYY-MM-DD>`
//! to the JSON form of that date's [`DaySessions`]. Backends only implement
//! the three raw entry primitives; loading, saving and date enumeration are
//! provided on top of them so that the key shape and the JSON handling live
//! in one place.
//!
//! Two backends ship with the crate: [`crate::db::Database`] (SQLite) and
//! [`MemoryStore`].

use std::collections::BTreeSet;

use jiff::civil::Date;
use log::{debug, warn};

use crate::{
    error::{Result, TrackerError},
    models::DaySessions,
};

pub mod memory;

pub use memory::MemoryStore;

/// Prefix shared by every stored session key.
pub const KEY_PREFIX: &str = "athlete-sessions-";

/// Storage key for a date.
///
/// ```rust
/// use athlete_core::store::session_key;
/// use jiff::civil::date;
///
/// assert_eq!(session_key(date(2024, 3, 9)), "athlete-sessions-2024-03-09");
/// ```
pub fn session_key(date: Date) -> String {
    format!("{KEY_PREFIX}{}", date.strftime("%Y-%m-%d"))
}

/// Date encoded in a storage key, `None` for foreign or malformed keys.
pub fn date_from_key(key: &str) -> Option<Date> {
    let raw = key.strip_prefix(KEY_PREFIX)?;
    // Only the canonical zero-padded form round-trips to the same key.
    if raw.len() != 10 {
        return None;
    }
    raw.parse().ok()
}

/// Persistence adapter mapping calendar dates to [`DaySessions`].
pub trait SessionStore {
    /// Raw stored value for `key`, `None` when absent.
    fn read_entry(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write_entry(&mut self, key: &str, value: &str) -> Result<()>;

    /// Every key currently present.
    fn entry_keys(&self) -> Result<Vec<String>>;

    /// Strictly reads the record for `date`.
    ///
    /// Returns `Ok(None)` when nothing is stored and
    /// [`TrackerError::StorageRead`] when the entry cannot be read or parsed.
    fn try_load(&self, date: Date) -> Result<Option<DaySessions>> {
        let key = session_key(date);
        let Some(raw) = self.read_entry(&key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| TrackerError::StorageRead {
                key,
                reason: e.to_string(),
            })
    }

    /// Record for `date`, empty when absent or unreadable.
    ///
    /// Read failures are logged and recovered locally; they never reach the
    /// caller.
    fn load(&self, date: Date) -> DaySessions {
        match self.try_load(date) {
            Ok(day) => day.unwrap_or_default(),
            Err(e) => {
                warn!("Substituting empty sessions for {date}: {e}");
                DaySessions::default()
            }
        }
    }

    /// Persists `day` as the full record for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::StorageWrite`] when the record cannot be
    /// serialized or the backend rejects the write.
    fn save(&mut self, date: Date, day: &DaySessions) -> Result<()> {
        let key = session_key(date);
        let value =
            serde_json::to_string(day).map_err(|e| TrackerError::storage_write(&key, e))?;
        self.write_entry(&key, &value).map_err(|e| match e {
            TrackerError::StorageWrite { .. } => e,
            other => TrackerError::storage_write(&key, other),
        })?;
        debug!("Saved sessions for {date}");
        Ok(())
    }

    /// Dates that have a stored record, in chronological order.
    fn list_dates(&self) -> Result<BTreeSet<Date>> {
        Ok(self
            .entry_keys()?
            .iter()
            .filter_map(|key| date_from_key(key))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{CategoryBlock, ExerciseRecord};

    #[test]
    fn test_key_round_trip() {
        let day = date(2024, 1, 5);
        assert_eq!(date_from_key(&session_key(day)), Some(day));
    }

    #[test]
    fn test_foreign_keys_are_ignored() {
        assert_eq!(date_from_key("settings"), None);
        assert_eq!(date_from_key("athlete-sessions-"), None);
        assert_eq!(date_from_key("athlete-sessions-2024-1-5"), None);
        assert_eq!(date_from_key("athlete-sessions-2024-13-01"), None);
        assert_eq!(date_from_key("athlete-sessions-yesterday"), None);
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load(date(2024, 1, 1)), DaySessions::default());
        assert!(store.try_load(date(2024, 1, 1)).unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut store = MemoryStore::new();
        store
            .write_entry("athlete-sessions-2024-01-01", "{not json")
            .unwrap();

        assert_eq!(store.load(date(2024, 1, 1)), DaySessions::default());
        assert!(matches!(
            store.try_load(date(2024, 1, 1)),
            Err(TrackerError::StorageRead { .. })
        ));
    }

    #[test]
    fn test_save_overwrites_whole_record() {
        let mut store = MemoryStore::new();
        let day = date(2024, 2, 2);
        let first = DaySessions {
            morning: vec![CategoryBlock::new("Core", vec![ExerciseRecord::default()])],
            evening: vec![CategoryBlock::new("Wall", vec![])],
        };
        store.save(day, &first).unwrap();

        let second = DaySessions {
            morning: vec![],
            evening: vec![CategoryBlock::new("Sprints", vec![])],
        };
        store.save(day, &second).unwrap();

        assert_eq!(store.load(day), second);
    }

    #[test]
    fn test_list_dates_sorted_and_filtered() {
        let mut store = MemoryStore::new();
        store.save(date(2024, 5, 1), &DaySessions::default()).unwrap();
        store.save(date(2023, 12, 31), &DaySessions::default()).unwrap();
        store.write_entry("unrelated-key", "{}").unwrap();

        let dates: Vec<Date> = store.list_dates().unwrap().into_iter().collect();
        assert_eq!(dates, vec![date(2023, 12, 31), date(2024, 5, 1)]);
    }
}
