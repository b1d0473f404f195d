//! Interactive disambiguation between filename candidates.

use crate::error::RenameError;
use regex::Regex;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// Strategy for picking one candidate out of several, kept behind a trait so
/// the interactive prompt can be swapped for a non-interactive one (or for
/// scripted input in tests) without touching the pipeline.
pub trait CandidateSelector {
    /// Return the index of the chosen candidate. `candidates` has at least
    /// two entries when this is called.
    fn select_index(&mut self, candidates: &[String]) -> Result<usize, RenameError>;
}

/// Return the single candidate, or ask the selector when several remain.
/// This is the only blocking/interactive step in the pipeline.
pub fn choose(
    mut candidates: Vec<String>,
    selector: &mut dyn CandidateSelector,
) -> Result<String, RenameError> {
    if candidates.len() == 1 {
        return Ok(candidates.remove(0));
    }

    let index = selector.select_index(&candidates)?;
    Ok(candidates.swap_remove(index))
}

/// Console prompt: prints every candidate as `"<index> : <candidate>"`, then
/// reads lines until one is digit-only and within bounds. There is no timeout;
/// the process waits for valid input.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    /// Prompt on the process's own stdin/stdout.
    pub fn stdin() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl<R, W> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> CandidateSelector for ConsolePrompt<R, W> {
    fn select_index(&mut self, candidates: &[String]) -> Result<usize, RenameError> {
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.output, "{i} : {candidate}")?;
        }
        self.output.flush()?;

        let digits = Regex::new(r"^\d+$").unwrap();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(RenameError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input closed before a selection was made",
                )));
            }

            let line = line.trim();
            if digits.is_match(line) {
                // Overflowing input falls through to the re-prompt.
                if let Ok(index) = line.parse::<usize>() {
                    if index < candidates.len() {
                        return Ok(index);
                    }
                }
            }

            writeln!(
                self.output,
                "enter an index between 0 and {}",
                candidates.len() - 1
            )?;
            self.output.flush()?;
        }
    }
}

/// Non-interactive strategy: always the first candidate.
pub struct FirstCandidate;

impl CandidateSelector for FirstCandidate {
    fn select_index(&mut self, _candidates: &[String]) -> Result<usize, RenameError> {
        Ok(0)
    }
}
