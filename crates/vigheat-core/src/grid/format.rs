// crates/vigheat-core/src/grid/format.rs
//
// Grid config files are TOML:
//
//   source_text = "bright clouds ..."
//   text_lengths = [15, 25, 40, 55, 70, "full"]
//   key_lengths = [2, 3, 4, 5, 6, 7, 8]
//
// Missing fields fall back to the built-in default grid.

use serde::Deserialize;

use crate::error::{Result, VigError};
use crate::grid::defaults::default_grid;
use crate::grid::grid::{EvalGrid, TextLength};
use crate::validate::validate_grid;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridFile {
    source_text: Option<String>,
    text_lengths: Option<Vec<TextLength>>,
    key_lengths: Option<Vec<usize>>,
}

/// Parse and validate a TOML grid config.
pub fn decode(s: &str) -> Result<EvalGrid> {
    let g = decode_unchecked(s)?;
    validate_grid(&g)?;
    Ok(g)
}

/// Parse a TOML grid config and merge it over the defaults without
/// validating. Callers that apply further overrides validate the result.
pub fn decode_unchecked(s: &str) -> Result<EvalGrid> {
    let f: GridFile = toml::from_str(s).map_err(|e| VigError::Format(format!("grid toml: {e}")))?;
    let base = default_grid();
    Ok(EvalGrid {
        source_text: f.source_text.unwrap_or(base.source_text),
        text_lengths: f.text_lengths.unwrap_or(base.text_lengths),
        key_lengths: f.key_lengths.unwrap_or(base.key_lengths),
    })
}

pub fn encode(g: &EvalGrid) -> Result<String> {
    toml::to_string(g).map_err(|e| VigError::Format(format!("grid toml: {e}")))
}
