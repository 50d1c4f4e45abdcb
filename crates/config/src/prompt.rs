//! Line-oriented user interaction.
//!
//! Responsibilities:
//! - Write prompts and status messages to an output stream.
//! - Read single trimmed answers from an input stream.
//!
//! Does NOT handle:
//! - Deciding what to ask (see `bootstrap`).
//!
//! Invariants:
//! - Prompts are flushed before blocking on input.
//! - EOF on input is an empty answer, never an error.

use std::io::{self, BufRead, Stdout, Write};

use crate::error::BootstrapError;

/// Reads answers from `R` and writes prompts and messages to `W`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    /// A prompter bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` without a newline and returns the next input line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, BootstrapError> {
        write!(self.output, "{}", prompt).map_err(BootstrapError::Prompt)?;
        self.output.flush().map_err(BootstrapError::Prompt)?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(BootstrapError::Prompt)?;

        Ok(answer.trim().to_string())
    }

    /// Writes `message` followed by a newline.
    pub fn say(&mut self, message: &str) -> Result<(), BootstrapError> {
        writeln!(self.output, "{}", message).map_err(BootstrapError::Prompt)
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> Result<(), BootstrapError> {
        self.output.flush().map_err(BootstrapError::Prompt)
    }

    /// Consumes the prompter, returning its input and output streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_writes_prompt_and_trims_answer() {
        let mut prompter = Prompter::new(Cursor::new("  Y \n"), Vec::new());

        let answer = prompter.ask("Continue? ").unwrap();
        assert_eq!(answer, "Y");

        let (_, output) = prompter.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Continue? ");
    }

    #[test]
    fn test_ask_reads_one_line_at_a_time() {
        let mut prompter = Prompter::new(Cursor::new("first\n\nthird\n"), Vec::new());

        assert_eq!(prompter.ask("1: ").unwrap(), "first");
        assert_eq!(prompter.ask("2: ").unwrap(), "");
        assert_eq!(prompter.ask("3: ").unwrap(), "third");
    }

    #[test]
    fn test_ask_at_eof_is_empty() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("anything? ").unwrap(), "");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        prompter.say("hello").unwrap();

        let (_, output) = prompter.into_inner();
        assert_eq!(output, b"hello\n");
    }
}
