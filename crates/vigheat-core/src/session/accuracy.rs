// crates/vigheat-core/src/session/accuracy.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN: f64 = 0.0;
pub const MAX: f64 = 100.0;

/// An operator-supplied percentage in [0, 100]. Never NaN.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Accuracy(f64);

#[derive(Debug, Error, PartialEq)]
pub enum AccuracyError {
    #[error("wrong input")]
    NotANumber,

    #[error("enter a number between 0 and 100.")]
    OutOfRange(f64),
}

impl Accuracy {
    pub fn new(v: f64) -> Result<Self, AccuracyError> {
        // NaN fails both comparisons.
        if (MIN..=MAX).contains(&v) {
            Ok(Self(v))
        } else {
            Err(AccuracyError::OutOfRange(v))
        }
    }

    /// Parse one line of operator input. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, AccuracyError> {
        let v: f64 = line.trim().parse().map_err(|_| AccuracyError::NotANumber)?;
        Self::new(v)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Accuracy {
    type Error = AccuracyError;

    fn try_from(v: f64) -> Result<Self, AccuracyError> {
        Self::new(v)
    }
}

impl From<Accuracy> for f64 {
    fn from(a: Accuracy) -> f64 {
        a.0
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
