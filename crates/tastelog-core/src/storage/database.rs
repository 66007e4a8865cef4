//! SQLite-backed key-value storage.
//!
//! The store keeps user-generated state (stats, notes, onboarding flag)
//! and the live countdown engine as JSON blobs in a single `kv` table.

use rusqlite::{params, Connection};

use crate::error::{CoreError, DatabaseError};

use super::{data_dir, Gateway};

/// SQLite database holding the application's key-value state.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/tastelog/tastelog.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()
            .map_err(|e| CoreError::Custom(e.to_string()))?
            .join("tastelog.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate().map_err(DatabaseError::from)?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate().map_err(DatabaseError::from)?;
        Ok(db)
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

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl Gateway for Database {
    fn load(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        self.kv_get(key).map_err(DatabaseError::from)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.kv_set(key, value).map_err(DatabaseError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn kv_set_overwrites() {
        let db = Database::open_memory().unwrap();
        db.kv_set("k", "one").unwrap();
        db.kv_set("k", "two").unwrap();
        assert_eq!(db.kv_get("k").unwrap().unwrap(), "two");
    }
}
