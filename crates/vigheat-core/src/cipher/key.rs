// crates/vigheat-core/src/cipher/key.rs

use std::fmt;

use rand::Rng;

use crate::cipher::alphabet::{self, ALPHABET};
use crate::error::{Result, VigError};

/// A non-empty run of lowercase letters. Each letter's alphabet index is the
/// shift it applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    text: String,
    shifts: Vec<u8>,
}

impl Key {
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(VigError::Validation("key must be non-empty".into()));
        }
        let shifts = text
            .chars()
            .map(|c| {
                alphabet::index_of(c).ok_or_else(|| {
                    VigError::Validation(format!("key must be lowercase a-z, got {c:?}"))
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self {
            text: text.to_owned(),
            shifts,
        })
    }

    /// Draw a random key of `len` letters. `len` must be >= 1.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Result<Self> {
        Self::new(&random_key(rng, len))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    #[inline]
    pub fn shift_at(&self, cursor: usize) -> u8 {
        self.shifts[cursor % self.shifts.len()]
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `len` letters drawn independently and uniformly from a..=z.
/// Length 0 yields an empty string.
pub fn random_key<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
