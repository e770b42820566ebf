// crates/vigheat-cli/src/io/results_file.rs

use anyhow::{Context, Result};
use vigheat_core::results::format as results_format;
use vigheat_core::ResultTable;

pub fn load(path: &str) -> Result<ResultTable> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read results {path}"))?;
    let table = results_format::decode(&s).with_context(|| format!("decode results {path}"))?;
    Ok(table)
}

pub fn save(path: &str, table: &ResultTable) -> Result<()> {
    let s = results_format::encode(table).context("encode results")?;
    std::fs::write(path, s).with_context(|| format!("write results {path}"))?;
    Ok(())
}
