//! Non-interactive commands run against the saved entries.

use crate::render;
use bolao_core::{KeyValueStore, Result, Session};

/// Load the saved entries and render them.
pub fn list_saved<S: KeyValueStore>(session: &mut Session<S>) -> Result<String> {
    let summary = session.load()?;
    let mut text = render::entries(session.entries());
    if summary.truncated() {
        text.push('\n');
        text.push_str(&render::load_summary(&summary));
    }
    Ok(text)
}

/// Load the saved entries and render the report for `result`.
pub fn check_saved<S: KeyValueStore>(
    session: &mut Session<S>,
    result: &str,
    date: Option<&str>,
) -> Result<String> {
    session.load()?;
    let report = session.apply(result, date)?;
    Ok(render::report(&report))
}
