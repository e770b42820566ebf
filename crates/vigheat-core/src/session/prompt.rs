// crates/vigheat-core/src/session/prompt.rs
//
// Console accuracy collection.
//
// States: awaiting input -> valid (return) | invalid (message, re-prompt).
// End of input is the only way out without a value and maps to Cancelled.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Result, VigError};
use crate::session::accuracy::{Accuracy, AccuracyError};
use crate::session::case::TestCase;

pub const PROMPT: &str = "Enter decryption accuracy (0-100): ";

/// Where accuracy scores come from. The session driver calls this once per case.
pub trait AccuracySource {
    fn accuracy_for(&mut self, case: &TestCase) -> Result<Accuracy>;
}

/// Shows each case on `output` and reads scores line by line from `input`.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt until a valid accuracy is entered. Attempts are unbounded.
    pub fn read_accuracy(&mut self) -> Result<Accuracy> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(VigError::Cancelled);
            }

            // Undecodable bytes are bad input like any other, not an IO failure.
            let parsed = std::str::from_utf8(&buf)
                .map_err(|_| AccuracyError::NotANumber)
                .and_then(Accuracy::parse);

            match parsed {
                Ok(a) => return Ok(a),
                Err(e) => {
                    if let AccuracyError::OutOfRange(v) = e {
                        debug!(value = v, "accuracy out of range");
                    }
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> AccuracySource for ConsolePrompt<R, W> {
    fn accuracy_for(&mut self, case: &TestCase) -> Result<Accuracy> {
        case.write_block(&mut self.output)?;
        self.read_accuracy()
    }
}

/// Replays a fixed list of scores in order. Useful for scripted runs.
#[derive(Clone, Debug, Default)]
pub struct ScriptedScores {
    scores: std::collections::VecDeque<Accuracy>,
}

impl ScriptedScores {
    pub fn new<I: IntoIterator<Item = Accuracy>>(scores: I) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.scores.len()
    }
}

impl AccuracySource for ScriptedScores {
    fn accuracy_for(&mut self, _case: &TestCase) -> Result<Accuracy> {
        self.scores.pop_front().ok_or(VigError::Cancelled)
    }
}
