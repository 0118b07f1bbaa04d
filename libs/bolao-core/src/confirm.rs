//! Yes/no confirmation capability.
//!
//! Destructive actions (delete, clear, saving an empty snapshot) ask the
//! caller-supplied `Confirm` before touching any state. Front ends plug in
//! an interactive prompt; tests plug in closures.

/// A synchronous yes/no prompt.
pub trait Confirm {
    /// Ask the user; `true` means proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
