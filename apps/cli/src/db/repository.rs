//! SQLite-backed key-value store.

use crate::db::error::DbError;
use bolao_core::KeyValueStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// SQLite implementation of the local key-value slot.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating it and its directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SCHEMA_VERSION)?;
        Ok(())
    }
}

impl KeyValueStore for SqliteRepository {
    type Error = DbError;

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::SCHEMA_VERSION;

    #[test]
    fn missing_key_is_none() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert_eq!(repo.get("absent").unwrap(), None);
    }

    #[test]
    fn set_overwrites() {
        let mut repo = SqliteRepository::open_in_memory().unwrap();
        repo.set("slot", "[1]").unwrap();
        repo.set("slot", "[]").unwrap();
        assert_eq!(repo.get("slot").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn keys_are_independent() {
        let mut repo = SqliteRepository::open_in_memory().unwrap();
        repo.set("a", "1").unwrap();
        repo.set("b", "2").unwrap();
        assert_eq!(repo.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(repo.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn schema_version_recorded() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let version: i32 = repo
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn file_database_persists_between_opens() {
        let dir = std::env::temp_dir().join(format!("bolao-test-{}", std::process::id()));
        let path = dir.join("nested").join("bolao.db");

        {
            let mut repo = SqliteRepository::open(&path).unwrap();
            repo.set("slot", "[]").unwrap();
        }
        let repo = SqliteRepository::open(&path).unwrap();
        assert_eq!(repo.get("slot").unwrap().as_deref(), Some("[]"));

        drop(repo);
        std::fs::remove_dir_all(&dir).ok();
    }
}
