//! Bounded, newest-first translation history.
//!
//! The whole list lives under a single key as a JSON array, so every
//! mutation is load, modify, store.

mod kv;
mod record;
mod sqlite;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub use kv::{KeyValueStore, MemoryStore};
pub use record::{TranslationRecord, next_id};
pub use sqlite::SqliteStore;

/// Key holding the serialized history list.
pub const HISTORY_KEY: &str = "translationHistory";

/// Maximum number of records kept; older ones are evicted.
pub const HISTORY_LIMIT: usize = 50;

pub struct HistoryStore<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the persisted history, newest first, or an empty list.
    pub fn load(&self) -> Result<Vec<TranslationRecord>> {
        let Some(json) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&json).context("Failed to parse stored history")
    }

    /// Prepends `record`, evicting the oldest entries past the limit.
    pub fn append(&self, record: TranslationRecord) -> Result<()> {
        let mut history = self.load()?;
        history.insert(0, record);
        history.truncate(HISTORY_LIMIT);
        self.save(&history)
    }

    /// Creates a record for a finished translation and appends it.
    pub fn record(
        &self,
        original: &str,
        translated: &str,
        style_name: &str,
    ) -> Result<TranslationRecord> {
        self.record_at(original, translated, style_name, Utc::now())
    }

    fn record_at(
        &self,
        original: &str,
        translated: &str,
        style_name: &str,
        now: DateTime<Utc>,
    ) -> Result<TranslationRecord> {
        let id = next_id(now, self.load()?.first());
        let record = TranslationRecord::new(id, original, translated, style_name, now);

        self.append(record.clone())?;

        Ok(record)
    }

    /// Removes the record with `id`. Returns whether anything was removed;
    /// an unknown id leaves the stored list untouched.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut history = self.load()?;
        let before = history.len();
        history.retain(|r| r.id != id);

        if history.len() == before {
            return Ok(false);
        }

        self.save(&history)?;
        Ok(true)
    }

    /// Drops the persisted list entirely.
    pub fn clear(&self) -> Result<()> {
        self.store
            .remove(HISTORY_KEY)
            .context("Failed to clear history")
    }

    fn save(&self, history: &[TranslationRecord]) -> Result<()> {
        let json = serde_json::to_string(history).context("Failed to serialize history")?;
        self.store
            .set(HISTORY_KEY, &json)
            .context("Failed to save history")
    }
}
