//! Text rendering of entries, reports and notices.

use bolao_core::{join_tokens, Entry, LoadSummary, PoolError, Report, Winner, MAX_ENTRIES};

pub const NO_WINNERS: &str = "No participant matched any number.";

/// One line per entry, numbered from 1, fields shown as typed.
pub fn entries(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries. Use `add` to create one.".to_string();
    }
    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "#{:<3} {:<24} {}\n",
            index + 1,
            or_placeholder(&entry.name, "(no name)"),
            or_placeholder(&entry.raw_numbers, "(no numbers)"),
        ));
    }
    out.push_str(&format!("{}/{} entries", entries.len(), MAX_ENTRIES));
    out
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Header with the draw, then each winner with matched tokens in brackets.
pub fn report(report: &Report) -> String {
    let mut out = format!("Draw result: {}", join_tokens(&report.draw.numbers));
    if let Some(date) = &report.draw.date {
        out.push_str(&format!(" | Date: {date}"));
    }
    out.push('\n');

    if report.has_winners() {
        for winner in report.winners() {
            out.push_str(&winner_block(winner));
        }
    } else {
        out.push_str(NO_WINNERS);
        out.push('\n');
    }
    out
}

fn winner_block(winner: &Winner) -> String {
    let numbers: Vec<String> = winner
        .tokens
        .iter()
        .map(|t| {
            if t.is_matched() {
                format!("[{}]", t.token)
            } else {
                t.token.clone()
            }
        })
        .collect();
    format!(
        "{} - {} point(s)\n  Numbers: {}\n",
        winner.name,
        winner.matched,
        numbers.join(", ")
    )
}

pub fn load_summary(summary: &LoadSummary) -> String {
    if summary.truncated() {
        format!(
            "Loaded {} entry(s); {} were saved, only the first {} were kept.",
            summary.loaded, summary.available, MAX_ENTRIES
        )
    } else {
        format!("Loaded {} entry(s).", summary.loaded)
    }
}

/// User-facing message for a recoverable error. Indices are shown from 1.
pub fn notice(error: &PoolError) -> String {
    match error {
        PoolError::CapacityExceeded { max } => format!("Limit of {max} entries reached!"),
        PoolError::EmptyResult => "Enter the drawn result (e.g. 06, 15, 22, 36, 41, 60).".to_string(),
        PoolError::NotFound { .. } => "There are no saved entries.".to_string(),
        PoolError::Corrupt(detail) => format!("Could not load the saved entries: {detail}"),
        PoolError::UserDeclined => "Cancelled.".to_string(),
        PoolError::NoSuchEntry { index } => format!("There is no entry #{}.", index + 1),
        PoolError::Storage(detail) => format!("Storage error: {detail}"),
    }
}
