// crates/vigheat-core/src/grid/defaults.rs

use crate::grid::grid::{EvalGrid, TextLength};

/// Lowercase only: the encoder leaves anything outside a..=z untouched.
pub const DEFAULT_SOURCE_TEXT: &str =
    "bright clouds gather above silent roads while distant voices echo through empty halls";

pub const DEFAULT_TEXT_LENGTHS: [usize; 5] = [15, 25, 40, 55, 70];
pub const DEFAULT_KEY_LENGTHS: std::ops::RangeInclusive<usize> = 2..=8;

/// 6 text lengths (the five fixed ones plus the full source) x 7 key lengths.
pub fn default_grid() -> EvalGrid {
    let mut text_lengths: Vec<TextLength> = DEFAULT_TEXT_LENGTHS
        .iter()
        .map(|&n| TextLength::Chars(n))
        .collect();
    text_lengths.push(TextLength::Full);

    EvalGrid {
        source_text: DEFAULT_SOURCE_TEXT.to_owned(),
        text_lengths,
        key_lengths: DEFAULT_KEY_LENGTHS.collect(),
    }
}
