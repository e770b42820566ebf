// crates/vigheat-core/src/session/case.rs

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::cipher::key::Key;
use crate::cipher::vigenere::encrypt;
use crate::error::Result;
use crate::grid::grid::EvalGrid;

/// One cell of the evaluation grid, ready to show to the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub text_len: usize,
    pub key_len: usize,
    pub key: Key,
    pub plaintext: String,
    pub ciphertext: String,
}

impl TestCase {
    pub fn generate<R: Rng + ?Sized>(
        grid: &EvalGrid,
        text_len: usize,
        key_len: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let plaintext = grid.sample(text_len);
        let key = Key::random(rng, key_len)?;
        let ciphertext = encrypt(&plaintext, &key);
        debug!(text_len, key_len, key = %key, "generated case");
        Ok(Self {
            text_len,
            key_len,
            key,
            plaintext,
            ciphertext,
        })
    }

    /// The block shown before each accuracy prompt.
    pub fn write_block<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            " -- Test Case: Text Length = {}, Key Length = {}",
            self.text_len, self.key_len
        )?;
        writeln!(out, "Key: {}", self.key)?;
        writeln!(out, "Encrypted Text: {}", self.ciphertext)
    }
}

/// Every case of the grid in session order, without prompting.
pub fn plan<R: Rng + ?Sized>(grid: &EvalGrid, rng: &mut R) -> Result<Vec<TestCase>> {
    grid.traversal()
        .into_iter()
        .map(|(tl, kl)| TestCase::generate(grid, tl, kl, rng))
        .collect()
}
