// crates/vigheat-core/src/session/driver.rs

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::grid::grid::EvalGrid;
use crate::results::table::{ResultEntry, ResultTable};
use crate::session::case::TestCase;
use crate::session::prompt::AccuracySource;
use crate::validate::validate_grid;

/// Visit every (text length, key length) pair once, in traversal order,
/// and collect one accuracy per pair.
pub fn run_session<R, S>(grid: &EvalGrid, rng: &mut R, source: &mut S) -> Result<ResultTable>
where
    R: Rng + ?Sized,
    S: AccuracySource + ?Sized,
{
    validate_grid(grid)?;
    info!(
        cases = grid.case_count(),
        source_chars = grid.source_chars(),
        "session start"
    );

    let mut table = ResultTable::new();
    for (tl, kl) in grid.traversal() {
        let case = TestCase::generate(grid, tl, kl, rng)?;
        let accuracy = source.accuracy_for(&case)?;
        table.insert(ResultEntry {
            text_len: case.text_len,
            key_len: case.key_len,
            key: case.key.to_string(),
            ciphertext: case.ciphertext,
            accuracy,
        })?;
    }

    info!(entries = table.len(), "session complete");
    Ok(table)
}
