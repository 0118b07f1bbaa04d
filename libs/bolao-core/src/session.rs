//! Session: dispatches user actions to the store, match engine and persistence.
//!
//! The session owns the entries; front ends render from `entries()` and
//! never hold their own copy.

use crate::confirm::Confirm;
use crate::error::{PoolError, Result};
use crate::matching;
use crate::persistence::{KeyValueStore, PersistenceAdapter};
use crate::store::EntryStore;
use crate::types::{Entry, LoadSummary, Report};

pub const CONFIRM_DELETE: &str = "Delete this participant?";
pub const CONFIRM_CLEAR: &str =
    "Remove all participants from the form? (entries saved on this device are not changed)";

pub struct Session<S> {
    store: EntryStore,
    persistence: PersistenceAdapter<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Start with an empty form. Nothing is loaded automatically.
    pub fn new(persistence: PersistenceAdapter<S>) -> Self {
        Self {
            store: EntryStore::new(),
            persistence,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut PersistenceAdapter<S> {
        &mut self.persistence
    }

    /// Add a blank row.
    pub fn add_entry(&mut self) -> Result<usize> {
        self.store.add("", "")
    }

    pub fn edit_name(&mut self, index: usize, name: &str) -> Result<()> {
        self.store.set_name(index, name)
    }

    pub fn edit_numbers(&mut self, index: usize, raw_numbers: &str) -> Result<()> {
        self.store.set_numbers(index, raw_numbers)
    }

    pub fn delete_entry(&mut self, index: usize, confirm: &mut impl Confirm) -> Result<Entry> {
        if self.store.get(index).is_none() {
            return Err(PoolError::NoSuchEntry { index });
        }
        if !confirm.confirm(CONFIRM_DELETE) {
            return Err(PoolError::UserDeclined);
        }
        self.store.remove(index)
    }

    /// Empty the form. The saved snapshot is left alone.
    pub fn clear(&mut self, confirm: &mut impl Confirm) -> Result<()> {
        if !confirm.confirm(CONFIRM_CLEAR) {
            return Err(PoolError::UserDeclined);
        }
        self.store.clear();
        Ok(())
    }

    pub fn apply(&self, draw_text: &str, date: Option<&str>) -> Result<Report> {
        matching::apply(draw_text, date, self.store.entries())
    }

    pub fn save(&mut self, confirm: &mut impl Confirm) -> Result<usize> {
        self.persistence.save(self.store.entries(), confirm)
    }

    /// Replace the form with the saved snapshot. On any error the form is untouched.
    pub fn load(&mut self) -> Result<LoadSummary> {
        let (entries, summary) = self.persistence.load()?;
        self.store.replace_all(entries);
        Ok(summary)
    }
}
