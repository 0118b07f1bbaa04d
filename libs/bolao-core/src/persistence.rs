//! Snapshot persistence over a local key-value slot.
//!
//! # Format
//! ```json
//! [{"nome": "Ana", "dezenas": "06, 15, 22"}, {"nome": "Bia", "dezenas": "1,2"}]
//! ```
//! One ordered array under a fixed key, overwritten wholesale on save.

use crate::confirm::Confirm;
use crate::error::{PoolError, Result};
use crate::types::{Entry, LoadSummary, PersistedEntry, MAX_ENTRIES, STORAGE_KEY};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt::Display;

/// Prompt shown before overwriting the slot with an empty snapshot.
pub const CONFIRM_EMPTY_SAVE: &str =
    "There are no filled entries. Save anyway (this clears the saved slot)?";

/// A string-to-string store that lives on this device.
pub trait KeyValueStore {
    type Error: Display;

    fn get(&self, key: &str) -> std::result::Result<Option<String>, Self::Error>;

    /// Write `value`, fully replacing anything stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), Self::Error>;
}

/// HashMap-backed store for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> std::result::Result<Option<String>, Self::Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), Self::Error> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the entry snapshot under one key.
pub struct PersistenceAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Adapter over `store` using the default slot key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Save the non-blank entries (fields trimmed) and return how many were written.
    ///
    /// An empty snapshot is only written after `confirm` agrees; declining
    /// leaves storage untouched.
    pub fn save(&mut self, entries: &[Entry], confirm: &mut impl Confirm) -> Result<usize> {
        let records: Vec<PersistedEntry> = entries
            .iter()
            .filter(|entry| !entry.is_blank())
            .map(|entry| PersistedEntry {
                name: entry.name.trim().to_string(),
                numbers: entry.raw_numbers.trim().to_string(),
            })
            .collect();

        if records.is_empty() && !confirm.confirm(CONFIRM_EMPTY_SAVE) {
            tracing::debug!(key = %self.key, "empty save declined");
            return Err(PoolError::UserDeclined);
        }

        let text = encode_snapshot(&records)?;
        self.store
            .set(&self.key, &text)
            .map_err(|e| PoolError::Storage(e.to_string()))?;

        tracing::debug!(key = %self.key, count = records.len(), "snapshot saved");
        Ok(records.len())
    }

    /// Read the snapshot, keeping at most `MAX_ENTRIES` records.
    pub fn load(&self) -> Result<(Vec<Entry>, LoadSummary)> {
        let text = self
            .store
            .get(&self.key)
            .map_err(|e| PoolError::Storage(e.to_string()))?
            .ok_or_else(|| PoolError::NotFound {
                key: self.key.clone(),
            })?;

        let records = decode_snapshot(&text)?;
        let available = records.len();
        let entries: Vec<Entry> = records
            .into_iter()
            .take(MAX_ENTRIES)
            .map(Entry::from)
            .collect();

        tracing::debug!(key = %self.key, loaded = entries.len(), available, "snapshot loaded");
        let summary = LoadSummary {
            loaded: entries.len(),
            available,
        };
        Ok((entries, summary))
    }
}

/// Serialize records to the snapshot text.
pub fn encode_snapshot(records: &[PersistedEntry]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| PoolError::Storage(e.to_string()))
}

/// Parse snapshot text. Anything other than an array of records is `Corrupt`.
pub fn decode_snapshot(text: &str) -> Result<Vec<PersistedEntry>> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| PoolError::Corrupt(e.to_string()))?;
    if !value.is_array() {
        return Err(PoolError::Corrupt("invalid data format: expected an array".to_string()));
    }
    serde_json::from_value(value).map_err(|e| PoolError::Corrupt(e.to_string()))
}
