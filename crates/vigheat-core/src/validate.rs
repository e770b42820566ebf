// crates/vigheat-core/src/validate.rs
//
// Precondition checks for source text and evaluation grids.
// The encoder only shifts ASCII lowercase letters, so any other alphabetic
// character in the source would silently pass through unshifted.

use std::collections::BTreeSet;

use crate::error::{Result, VigError};
use crate::grid::grid::EvalGrid;

/// Reject plaintext containing alphabetic characters outside `a..=z`.
pub fn validate_plaintext(text: &str) -> Result<()> {
    if let Some((pos, ch)) = text
        .chars()
        .enumerate()
        .find(|&(_, c)| c.is_alphabetic() && !c.is_ascii_lowercase())
    {
        return Err(VigError::Validation(format!(
            "plaintext must be lowercase: found {ch:?} at char {pos}"
        )));
    }
    Ok(())
}

/// Lowercase the text so it passes `validate_plaintext` when it only held
/// ASCII letters. Non-ASCII letters are still rejected afterwards.
pub fn normalize_plaintext(text: &str) -> String {
    text.to_ascii_lowercase()
}

pub fn validate_grid(g: &EvalGrid) -> Result<()> {
    if g.source_text.is_empty() {
        return Err(VigError::Validation("source_text must be non-empty".into()));
    }
    validate_plaintext(&g.source_text)?;

    if g.text_lengths.is_empty() {
        return Err(VigError::Validation("text_lengths must be non-empty".into()));
    }
    if g.key_lengths.is_empty() {
        return Err(VigError::Validation("key_lengths must be non-empty".into()));
    }

    let text_lengths = g.resolved_text_lengths();
    if text_lengths.iter().any(|&n| n == 0) {
        return Err(VigError::Validation("text lengths must be >= 1".into()));
    }
    // Zero-length keys would make the cursor modulus undefined.
    if g.key_lengths.iter().any(|&n| n == 0) {
        return Err(VigError::Validation("key lengths must be >= 1".into()));
    }

    if let Some(dup) = first_duplicate(&text_lengths) {
        return Err(VigError::Validation(format!(
            "duplicate text length {dup}"
        )));
    }
    if let Some(dup) = first_duplicate(&g.key_lengths) {
        return Err(VigError::Validation(format!(
            "duplicate key length {dup}"
        )));
    }

    Ok(())
}

fn first_duplicate(xs: &[usize]) -> Option<usize> {
    let mut seen = BTreeSet::new();
    xs.iter().copied().find(|&x| !seen.insert(x))
}
