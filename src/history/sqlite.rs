use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use super::kv::KeyValueStore;
use crate::paths;

/// `SQLite`-backed key-value store (one `kv` table, text values).
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens the store at `$XDG_DATA_HOME/funtl/history.db`.
    pub fn open_default() -> Result<Self> {
        Self::open(paths::data_dir()?.join("history.db"))
    }

    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        let store = Self { db_path };
        store.init_db()?;

        Ok(store)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create kv table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).with_context(|| {
            format!(
                "Failed to open history database: {}",
                self.db_path.display()
            )
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connect()?;

        conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .with_context(|| format!("Failed to read key '{key}'"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at)
             VALUES (?1, ?2, CURRENT_TIMESTAMP)",
            [key, value],
        )
        .with_context(|| format!("Failed to write key '{key}'"))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute("DELETE FROM kv WHERE key = ?1", [key])
            .with_context(|| format!("Failed to remove key '{key}'"))?;

        Ok(())
    }
}
