//! Bounded, ordered in-memory collection of entries.

use crate::error::{PoolError, Result};
use crate::types::{Entry, MAX_ENTRIES};

/// Entries currently on the form. Position is identity.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ENTRIES
    }

    /// Append an entry and return its index. Rejected once the cap is reached.
    pub fn add(&mut self, name: impl Into<String>, raw_numbers: impl Into<String>) -> Result<usize> {
        if self.is_full() {
            return Err(PoolError::CapacityExceeded { max: MAX_ENTRIES });
        }
        self.entries.push(Entry::new(name, raw_numbers));
        Ok(self.entries.len() - 1)
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(PoolError::NoSuchEntry { index });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace everything with `entries`, silently keeping only the first
    /// `MAX_ENTRIES`. Returns how many were kept.
    pub fn replace_all<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = Entry>,
    {
        self.entries = entries.into_iter().take(MAX_ENTRIES).collect();
        self.entries.len()
    }

    /// Overwrite the name field as typed.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.entry_mut(index)?.name = name.into();
        Ok(())
    }

    /// Overwrite the numbers field as typed. No normalization happens here.
    pub fn set_numbers(&mut self, index: usize, raw_numbers: impl Into<String>) -> Result<()> {
        self.entry_mut(index)?.raw_numbers = raw_numbers.into();
        Ok(())
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry> {
        self.entries
            .get_mut(index)
            .ok_or(PoolError::NoSuchEntry { index })
    }
}
