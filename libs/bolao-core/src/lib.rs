//! Core library for the lottery pool form.
//!
//! Provides:
//! - Number list parser (comma-separated text to two-digit tokens)
//! - Bounded in-memory entry store
//! - Match engine comparing entries against a drawn result
//! - Snapshot persistence over an injected key-value store
//! - Session dispatch used by the user-facing front end

pub mod confirm;
pub mod error;
pub mod matching;
pub mod parser;
pub mod persistence;
pub mod session;
pub mod store;
pub mod types;

pub use confirm::Confirm;
pub use error::{PoolError, Result};
pub use matching::apply;
pub use parser::{join_tokens, normalize};
pub use persistence::{KeyValueStore, MemoryStore, PersistenceAdapter};
pub use session::Session;
pub use store::EntryStore;
pub use types::{
    DrawResult, Entry, LoadSummary, MarkedToken, Outcome, PersistedEntry, Report, TokenStatus,
    Winner, MAX_ENTRIES, STORAGE_KEY,
};
