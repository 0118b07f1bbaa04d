//! Core types for the lottery pool.

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of entries held at once.
pub const MAX_ENTRIES: usize = 30;

/// Key of the single persisted snapshot slot.
pub const STORAGE_KEY: &str = "mega_sena_jogos_v1";

/// One participant row: a display name and the numbers exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub raw_numbers: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, raw_numbers: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_numbers: raw_numbers.into(),
        }
    }

    /// Both fields empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.raw_numbers.trim().is_empty()
    }

    /// Both fields filled after trimming; only these take part in matching.
    pub fn is_playable(&self) -> bool {
        !self.name.trim().is_empty() && !self.raw_numbers.trim().is_empty()
    }
}

/// Snapshot record, serialized as `{"nome": ..., "dezenas": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedEntry {
    #[serde(rename = "nome", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "dezenas", default, deserialize_with = "null_as_empty")]
    pub numbers: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&Entry> for PersistedEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            numbers: entry.raw_numbers.clone(),
        }
    }
}

impl From<PersistedEntry> for Entry {
    fn from(record: PersistedEntry) -> Self {
        Self {
            name: record.name,
            raw_numbers: record.numbers,
        }
    }
}

/// A drawn result: normalized tokens plus an optional display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawResult {
    pub numbers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Whether a token of an entry appears in the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStatus {
    Matched,
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedToken {
    pub token: String,
    pub status: TokenStatus,
}

impl MarkedToken {
    pub fn is_matched(&self) -> bool {
        self.status == TokenStatus::Matched
    }
}

/// An entry with at least one matched token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    /// Position of the entry in the store when the report was made.
    pub index: usize,
    pub name: String,
    pub tokens: Vec<MarkedToken>,
    pub matched: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "winners")]
pub enum Outcome {
    Winners(Vec<Winner>),
    NoWinners,
}

/// Result of applying a draw to the stored entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub draw: DrawResult,
    pub outcome: Outcome,
}

impl Report {
    pub fn winners(&self) -> &[Winner] {
        match &self.outcome {
            Outcome::Winners(winners) => winners,
            Outcome::NoWinners => &[],
        }
    }

    pub fn has_winners(&self) -> bool {
        matches!(self.outcome, Outcome::Winners(_))
    }
}

/// How many records a load put into the store, and how many were saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub available: usize,
}

impl LoadSummary {
    pub fn truncated(&self) -> bool {
        self.available > self.loaded
    }
}
