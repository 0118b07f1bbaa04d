//! Read-eval-print loop over a session.

use super::{parse, Action, HELP};
use crate::prompt::LinePrompt;
use crate::render;
use bolao_core::{Confirm, KeyValueStore, Session};
use std::io::{self, BufRead, Write};

/// Draw fields of the form, kept between commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawForm {
    pub result: String,
    pub date: String,
}

/// Run the interactive form until `quit` or end of input.
pub fn run_repl<S, R, W>(session: &mut Session<S>, input: &mut R, output: &mut W) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut form = DrawForm::default();
    writeln!(output, "Lottery pool form. Type `help` for commands.")?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        let action = match parse(&line) {
            Ok(Some(Action::Quit)) => break,
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        let message = {
            let mut prompt = LinePrompt::new(&mut *input, &mut *output);
            execute(session, &mut form, action, &mut prompt)
        };
        writeln!(output, "{message}")?;
    }

    tracing::info!(entries = session.entries().len(), "form closed");
    Ok(())
}

/// Perform one action and return the text to show.
pub fn execute<S: KeyValueStore>(
    session: &mut Session<S>,
    form: &mut DrawForm,
    action: Action,
    confirm: &mut impl Confirm,
) -> String {
    let result = match action {
        Action::Add => session
            .add_entry()
            .map(|index| format!("Added entry #{}.", index + 1)),
        Action::Name { index, text } => session
            .edit_name(index, &text)
            .map(|_| format!("Entry #{} updated.", index + 1)),
        Action::Numbers { index, text } => session
            .edit_numbers(index, &text)
            .map(|_| format!("Entry #{} updated.", index + 1)),
        Action::Delete { index } => session
            .delete_entry(index, confirm)
            .map(|_| format!("Entry #{} deleted.", index + 1)),
        Action::List => Ok(render::entries(session.entries())),
        Action::Result(text) => {
            form.result = text;
            Ok(format!("Result: {}", form.result))
        }
        Action::Date(text) => {
            form.date = text;
            Ok(format!("Date: {}", form.date))
        }
        Action::Apply(text) => {
            if let Some(text) = text {
                form.result = text;
            }
            session
                .apply(&form.result, Some(&form.date))
                .map(|report| render::report(&report))
        }
        Action::Save => session.save(confirm).map(|count| {
            tracing::info!(count, "entries saved");
            "Entries saved on this device.".to_string()
        }),
        Action::Load => session.load().map(|summary| {
            tracing::info!(loaded = summary.loaded, available = summary.available, "entries loaded");
            render::load_summary(&summary)
        }),
        Action::Clear => session
            .clear(confirm)
            .map(|_| "All participants removed from the form.".to_string()),
        Action::Help => Ok(HELP.to_string()),
        Action::Quit => Ok(String::new()),
    };

    result.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "action rejected");
        render::notice(&e)
    })
}
