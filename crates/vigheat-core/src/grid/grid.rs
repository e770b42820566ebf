// crates/vigheat-core/src/grid/grid.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VigError};

/// One entry of the text-length axis. `Full` resolves to the source length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TextLengthRepr", into = "TextLengthRepr")]
pub enum TextLength {
    Chars(usize),
    Full,
}

/// On-disk form: an integer or the word "full".
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum TextLengthRepr {
    Chars(usize),
    Word(String),
}

impl TryFrom<TextLengthRepr> for TextLength {
    type Error = VigError;

    fn try_from(r: TextLengthRepr) -> Result<Self> {
        match r {
            TextLengthRepr::Chars(n) => Ok(TextLength::Chars(n)),
            TextLengthRepr::Word(w) => w.parse(),
        }
    }
}

impl From<TextLength> for TextLengthRepr {
    fn from(t: TextLength) -> Self {
        match t {
            TextLength::Chars(n) => TextLengthRepr::Chars(n),
            TextLength::Full => TextLengthRepr::Word("full".into()),
        }
    }
}

impl TextLength {
    pub fn resolve(self, source_chars: usize) -> usize {
        match self {
            TextLength::Chars(n) => n,
            TextLength::Full => source_chars,
        }
    }
}

impl fmt::Display for TextLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextLength::Chars(n) => write!(f, "{n}"),
            TextLength::Full => f.write_str("full"),
        }
    }
}

impl FromStr for TextLength {
    type Err = VigError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("full") {
            return Ok(TextLength::Full);
        }
        s.parse::<usize>()
            .map(TextLength::Chars)
            .map_err(|_| VigError::Input(format!("text length must be an integer or 'full', got {s:?}")))
    }
}

/// The evaluation plan: a source text and the two axes whose cross-product
/// is visited once per session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalGrid {
    pub source_text: String,
    pub text_lengths: Vec<TextLength>,
    pub key_lengths: Vec<usize>,
}

impl EvalGrid {
    pub fn source_chars(&self) -> usize {
        self.source_text.chars().count()
    }

    /// Text lengths in declared order with `full` resolved.
    pub fn resolved_text_lengths(&self) -> Vec<usize> {
        let n = self.source_chars();
        self.text_lengths.iter().map(|t| t.resolve(n)).collect()
    }

    pub fn text_lengths_ascending(&self) -> Vec<usize> {
        let mut v = self.resolved_text_lengths();
        v.sort_unstable();
        v
    }

    pub fn key_lengths_ascending(&self) -> Vec<usize> {
        let mut v = self.key_lengths.clone();
        v.sort_unstable();
        v
    }

    /// Session order: text lengths descending (outer), key lengths
    /// descending (inner).
    pub fn traversal(&self) -> Vec<(usize, usize)> {
        let keys = self.key_lengths_ascending();
        self.text_lengths_ascending()
            .into_iter()
            .rev()
            .flat_map(|tl| keys.iter().rev().map(move |&kl| (tl, kl)))
            .collect()
    }

    pub fn case_count(&self) -> usize {
        self.text_lengths.len() * self.key_lengths.len()
    }

    /// First `len` chars of the source; the whole source if `len` exceeds it.
    pub fn sample(&self, len: usize) -> String {
        self.source_text.chars().take(len).collect()
    }
}

impl Default for EvalGrid {
    fn default() -> Self {
        crate::grid::defaults::default_grid()
    }
}

/// Parse a comma separated list such as `15,25,full`.
pub fn parse_text_lengths(s: &str) -> Result<Vec<TextLength>> {
    s.split(',')
        .filter(|p| !p.trim().is_empty())
        .map(TextLength::from_str)
        .collect()
}

/// Parse a comma separated list such as `2,3,4` or a range `2..=8`.
pub fn parse_key_lengths(s: &str) -> Result<Vec<usize>> {
    let s = s.trim();
    if let Some((lo, hi)) = s.split_once("..=") {
        let lo = parse_usize(lo)?;
        let hi = parse_usize(hi)?;
        if lo > hi {
            return Err(VigError::Input(format!("empty key length range {s:?}")));
        }
        return Ok((lo..=hi).collect());
    }
    s.split(',')
        .filter(|p| !p.trim().is_empty())
        .map(parse_usize)
        .collect()
}

fn parse_usize(s: &str) -> Result<usize> {
    let s = s.trim();
    s.parse::<usize>()
        .map_err(|_| VigError::Input(format!("expected a non-negative integer, got {s:?}")))
}
