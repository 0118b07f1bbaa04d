//! Match engine: compares a drawn result against every entry.

use crate::error::{PoolError, Result};
use crate::parser::normalize;
use crate::types::{DrawResult, Entry, MarkedToken, Outcome, Report, TokenStatus, Winner};
use std::collections::HashSet;

/// Apply a draw to `entries` and report every entry with at least one hit.
///
/// Entries missing a name or numbers are skipped. Winners keep store order.
/// Fails with `EmptyResult` when the draw text yields no tokens.
pub fn apply(draw_text: &str, date: Option<&str>, entries: &[Entry]) -> Result<Report> {
    let numbers = normalize(draw_text);
    if numbers.is_empty() {
        return Err(PoolError::EmptyResult);
    }

    let drawn: HashSet<&str> = numbers.iter().map(String::as_str).collect();
    let winners: Vec<Winner> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_playable())
        .filter_map(|(index, entry)| score_entry(index, entry, &drawn))
        .collect();

    let outcome = if winners.is_empty() {
        Outcome::NoWinners
    } else {
        Outcome::Winners(winners)
    };

    Ok(Report {
        draw: DrawResult {
            numbers,
            date: date.filter(|d| !d.trim().is_empty()).map(str::to_string),
        },
        outcome,
    })
}

/// Mark each token of an entry against the drawn set.
///
/// Membership only: a repeated token that was drawn is marked every time.
pub fn mark_tokens(tokens: Vec<String>, drawn: &HashSet<&str>) -> Vec<MarkedToken> {
    tokens
        .into_iter()
        .map(|token| {
            let status = if drawn.contains(token.as_str()) {
                TokenStatus::Matched
            } else {
                TokenStatus::Unmatched
            };
            MarkedToken { token, status }
        })
        .collect()
}

fn score_entry(index: usize, entry: &Entry, drawn: &HashSet<&str>) -> Option<Winner> {
    let tokens = mark_tokens(normalize(&entry.raw_numbers), drawn);
    let matched = tokens.iter().filter(|t| t.is_matched()).count();
    if matched == 0 {
        return None;
    }
    Some(Winner {
        index,
        name: entry.name.trim().to_string(),
        tokens,
        matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn marked(token: &str, matched: bool) -> MarkedToken {
        MarkedToken {
            token: token.to_string(),
            status: if matched {
                TokenStatus::Matched
            } else {
                TokenStatus::Unmatched
            },
        }
    }

    #[test]
    fn counts_and_marks_matches() {
        let entries = vec![Entry::new("Ana", "06,15,22,36,41,60")];
        let report = apply("06,60", None, &entries).unwrap();

        assert_eq!(
            report.winners(),
            &[Winner {
                index: 0,
                name: "Ana".to_string(),
                tokens: vec![
                    marked("06", true),
                    marked("15", false),
                    marked("22", false),
                    marked("36", false),
                    marked("41", false),
                    marked("60", true),
                ],
                matched: 2,
            }]
        );
    }

    #[test]
    fn normalizes_both_sides() {
        let entries = vec![Entry::new("Ana", " 6, 7 ")];
        let report = apply("06, 7", None, &entries).unwrap();
        assert_eq!(report.draw.numbers, vec!["06".to_string(), "07".to_string()]);
        assert_eq!(report.winners()[0].matched, 2);
    }

    #[test]
    fn repeated_token_counts_each_time() {
        let entries = vec![Entry::new("Ana", "06,06,15")];
        let report = apply("6", None, &entries).unwrap();
        let winner = &report.winners()[0];
        assert_eq!(winner.matched, 2);
        assert_eq!(
            winner.tokens,
            vec![marked("06", true), marked("06", true), marked("15", false)]
        );
    }

    #[test]
    fn skips_entries_with_empty_fields() {
        let entries = vec![
            Entry::new("", "06,15"),
            Entry::new("Bia", "   "),
            Entry::new("Caio", "15"),
        ];
        let report = apply("06,15", None, &entries).unwrap();
        let names: Vec<_> = report.winners().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Caio"]);
        assert_eq!(report.winners()[0].index, 2);
    }

    #[test]
    fn preserves_store_order() {
        let entries = vec![
            Entry::new("Low", "01"),
            Entry::new("High", "01,02,03"),
        ];
        let report = apply("01,02,03", None, &entries).unwrap();
        let names: Vec<_> = report.winners().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "High"]);
    }

    #[test]
    fn no_winners_is_explicit() {
        let entries = vec![Entry::new("Ana", "06,15"), Entry::new("Bia", "01")];
        let report = apply("99,98", None, &entries).unwrap();
        assert_eq!(report.outcome, Outcome::NoWinners);
        assert!(!report.has_winners());
    }

    #[test]
    fn empty_draw_is_rejected() {
        let entries = vec![Entry::new("Ana", "06")];
        assert_eq!(apply(" , ", None, &entries), Err(PoolError::EmptyResult));
        assert_eq!(apply("", Some("01/01"), &entries), Err(PoolError::EmptyResult));
    }

    #[test]
    fn date_label_is_carried() {
        let report = apply("01", Some("2024-12-31"), &[]).unwrap();
        assert_eq!(report.draw.date.as_deref(), Some("2024-12-31"));

        let report = apply("01", Some("  "), &[]).unwrap();
        assert_eq!(report.draw.date, None);
    }
}
