//! Line-based yes/no prompt for confirmations.

use bolao_core::Confirm;
use std::io::{BufRead, Write};

/// Asks on `output` and reads one answer line from `input`.
pub struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LinePrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ").and_then(|_| self.output.flush()).is_err() {
            return false;
        }
        let mut answer = Vec::new();
        match self.input.read_until(b'\n', &mut answer) {
            Ok(_) => is_yes(&String::from_utf8_lossy(&answer)),
            Err(e) => {
                tracing::warn!("failed to read confirmation: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = LinePrompt::new(&mut input, &mut output).confirm("Delete?");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_yes() {
        assert!(ask("y\n").0);
        assert!(ask(" YES \n").0);
        assert!(ask("sim\n").0);
    }

    #[test]
    fn anything_else_declines() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn invalid_utf8_answer_declines() {
        let mut input = Cursor::new(b"\xff\xfe\nnext\n".to_vec());
        let mut output = Vec::new();
        assert!(!LinePrompt::new(&mut input, &mut output).confirm("Delete?"));

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "next\n");
    }

    #[test]
    fn writes_prompt() {
        assert_eq!(ask("y\n").1, "Delete? [y/N] ");
    }
}
