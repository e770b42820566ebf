// crates/vigheat-core/src/results/format.rs
//
// Results files are JSONL, one ResultEntry per line:
// {"text_len":15,"key_len":2,"key":"qk","ciphertext":"...","accuracy":42.5}

use crate::error::{Result, VigError};
use crate::results::table::{ResultEntry, ResultTable};

pub fn encode(table: &ResultTable) -> Result<String> {
    let mut s = String::new();
    for e in table.entries() {
        let line = serde_json::to_string(e).map_err(|e| VigError::Format(format!("results jsonl: {e}")))?;
        s.push_str(&line);
        s.push('\n');
    }
    Ok(s)
}

/// Blank lines are skipped. Duplicate pairs are rejected.
pub fn decode(s: &str) -> Result<ResultTable> {
    let entries = s
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            serde_json::from_str::<ResultEntry>(l)
                .map_err(|e| VigError::Format(format!("results jsonl line {}: {e}", i + 1)))
        })
        .collect::<Result<Vec<_>>>()?;
    ResultTable::from_entries(entries)
}
