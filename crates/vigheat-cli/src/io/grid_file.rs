// crates/vigheat-cli/src/io/grid_file.rs

use anyhow::{Context, Result};
use vigheat_core::grid::format as grid_format;
use vigheat_core::EvalGrid;

/// Load a .toml grid config. Not validated: CLI overrides are applied on
/// top and the merged grid is validated once in `GridArgs::resolve`.
pub fn load(path: &str) -> Result<EvalGrid> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read grid {path}"))?;
    let grid = grid_format::decode_unchecked(&s).with_context(|| format!("decode grid {path}"))?;
    Ok(grid)
}
