//! Parser for comma-separated number lists.
//!
//! # Format
//! ```text
//! 6, 15,22 ,36,41,60
//! ```
//! Pieces are split on `,`, trimmed, empty pieces dropped, and the rest
//! left-padded with `0` to two characters. Nothing is rejected: duplicates,
//! out-of-range values and non-numeric text pass through as tokens.

/// Parse free text into normalized two-digit tokens, in input order.
pub fn normalize(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(pad_token)
        .collect()
}

/// Render tokens back to text in the canonical `06, 15` form.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(", ")
}

fn pad_token(piece: &str) -> String {
    format!("{piece:0>2}")
}
