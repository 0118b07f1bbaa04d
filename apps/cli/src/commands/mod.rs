//! Interactive form commands.

pub mod oneshot;
pub mod repl;

pub use oneshot::{check_saved, list_saved};
pub use repl::{execute, run_repl, DrawForm};

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  add                      add a blank entry
  name <n> <text>          set the name of entry n
  numbers <n> <text>       set the numbers of entry n (e.g. 06, 15, 22)
  delete <n>               delete entry n (asks first)
  list                     show all entries
  result <text>            set the drawn numbers
  date <text>              set the draw date label (empty clears it)
  apply [text]             check entries against the drawn numbers
  save                     save entries on this device
  load                     replace the form with the saved entries
  clear                    remove all entries from the form (asks first)
  help                     show this help
  quit                     leave";

/// A parsed form action. Entry indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Name { index: usize, text: String },
    Numbers { index: usize, text: String },
    Delete { index: usize },
    List,
    Result(String),
    Date(String),
    Apply(Option<String>),
    Save,
    Load,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Action>, ActionError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = split_word(line);

    let action = match word.to_lowercase().as_str() {
        "add" => Action::Add,
        "name" => {
            let (index, text) = indexed(rest, "name <n> <text>")?;
            Action::Name { index, text }
        }
        "numbers" | "nums" => {
            let (index, text) = indexed(rest, "numbers <n> <text>")?;
            Action::Numbers { index, text }
        }
        "delete" | "del" => {
            let (index, _) = indexed(rest, "delete <n>")?;
            Action::Delete { index }
        }
        "list" | "ls" => Action::List,
        "result" => Action::Result(rest.to_string()),
        "date" => Action::Date(rest.to_string()),
        "apply" => Action::Apply(Some(rest).filter(|r| !r.is_empty()).map(str::to_string)),
        "save" => Action::Save,
        "load" => Action::Load,
        "clear" => Action::Clear,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        other => return Err(ActionError::Unknown(other.to_string())),
    };
    Ok(Some(action))
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

/// Read a one-based entry number followed by free text.
fn indexed(rest: &str, usage: &'static str) -> Result<(usize, String), ActionError> {
    let (number, text) = split_word(rest);
    match number.parse::<usize>() {
        Ok(n) if n >= 1 => Ok((n - 1, text.to_string())),
        _ => Err(ActionError::Usage(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse("   \n"), Ok(None));
    }

    #[test]
    fn parses_simple_words() {
        assert_eq!(parse("add"), Ok(Some(Action::Add)));
        assert_eq!(parse("SAVE\n"), Ok(Some(Action::Save)));
        assert_eq!(parse("exit"), Ok(Some(Action::Quit)));
    }

    #[test]
    fn parses_indexed_text() {
        assert_eq!(
            parse("name 2 Rodrigo ADM"),
            Ok(Some(Action::Name {
                index: 1,
                text: "Rodrigo ADM".to_string()
            }))
        );
        assert_eq!(
            parse("numbers 1 06, 15,22"),
            Ok(Some(Action::Numbers {
                index: 0,
                text: "06, 15,22".to_string()
            }))
        );
        assert_eq!(parse("name 1"), Ok(Some(Action::Name { index: 0, text: String::new() })));
    }

    #[test]
    fn rejects_bad_index() {
        assert_eq!(parse("delete 0"), Err(ActionError::Usage("delete <n>")));
        assert_eq!(parse("delete x"), Err(ActionError::Usage("delete <n>")));
        assert_eq!(parse("name"), Err(ActionError::Usage("name <n> <text>")));
    }

    #[test]
    fn apply_with_and_without_text() {
        assert_eq!(parse("apply"), Ok(Some(Action::Apply(None))));
        assert_eq!(
            parse("apply 06, 60"),
            Ok(Some(Action::Apply(Some("06, 60".to_string()))))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse("draw"), Err(ActionError::Unknown("draw".to_string())));
    }
}
