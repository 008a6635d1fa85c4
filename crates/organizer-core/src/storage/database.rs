//! SQLite-backed key-value store.
//!
//! Each logical collection is one row in the `kv` table holding its full
//! JSON snapshot. Writes replace the row; there are no partial updates.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, Store};
use crate::error::{Result, StoreError};

/// Persistent store at `<data_dir>/organizer.db`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store in the data directory.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("organizer.db");
        Self::open_at(&path)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)")?;
            for (key, value) in entries {
                stmt.execute(params![key, value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.get("test").unwrap().is_none());
        store.set("test", "hello").unwrap();
        assert_eq!(store.get("test").unwrap().unwrap(), "hello");
        store.set("test", "again").unwrap();
        assert_eq!(store.get("test").unwrap().unwrap(), "again");
    }

    #[test]
    fn set_many_writes_all_keys() {
        let store = SqliteStore::open_memory().unwrap();
        store
            .set_many(&[("tasks", "[]".to_string()), ("darkMode", "true".to_string())])
            .unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn set_many_rolls_back_on_failure() {
        let store = SqliteStore::open_memory().unwrap();
        store.set("tasks", "[1]").unwrap();
        store
            .conn
            .execute_batch(
                "CREATE TRIGGER reject_routines BEFORE INSERT ON kv
                 WHEN NEW.key = 'routines'
                 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .unwrap();

        let result = store.set_many(&[
            ("tasks", "[2]".to_string()),
            ("routines", "[]".to_string()),
        ]);
        assert!(result.is_err());
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[1]"));
        assert!(store.get("routines").unwrap().is_none());
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("organizer.db");
        {
            let store = SqliteStore::open_at(&path).unwrap();
            store.set("routines", "[]").unwrap();
        }
        let store = SqliteStore::open_at(&path).unwrap();
        assert_eq!(store.get("routines").unwrap().as_deref(), Some("[]"));
    }
}
