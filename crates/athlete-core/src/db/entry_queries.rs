//! Session entry reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    store::SessionStore,
};

const SELECT_ENTRY_SQL: &str = "SELECT value FROM session_entries WHERE key = ?1";
const UPSERT_ENTRY_SQL: &str = "INSERT INTO session_entries (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_KEYS_SQL: &str = "SELECT key FROM session_entries ORDER BY key";

impl SessionStore for super::Database {
    fn read_entry(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_ENTRY_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query session entry")
    }

    fn write_entry(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_ENTRY_SQL,
            params![key, value, Timestamp::now().to_string()],
        )
        .db_context("Failed to write session entry")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    fn entry_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_KEYS_SQL)
            .db_context("Failed to prepare query")?;

        let keys = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to query session keys")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to read session keys")?;

        Ok(keys)
    }
}
