// crates/vigheat-core/src/heatmap/grid.rs

use crate::grid::grid::EvalGrid;
use crate::results::table::ResultTable;

/// Dense accuracy matrix. Row i is `text_lengths[i]`, column j is
/// `key_lengths[j]`; both axes ascending. Missing pairs read as 0.0.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapGrid {
    pub text_lengths: Vec<usize>,
    pub key_lengths: Vec<usize>,
    pub cells: Vec<Vec<f64>>,
}

impl HeatmapGrid {
    pub fn build(table: &ResultTable, text_lengths: &[usize], key_lengths: &[usize]) -> Self {
        let cells = text_lengths
            .iter()
            .map(|&tl| {
                key_lengths
                    .iter()
                    .map(|&kl| table.get(tl, kl).map_or(0.0, |a| a.value()))
                    .collect()
            })
            .collect();
        Self {
            text_lengths: text_lengths.to_vec(),
            key_lengths: key_lengths.to_vec(),
            cells,
        }
    }

    /// Axes taken from the evaluation grid.
    pub fn from_grid(table: &ResultTable, grid: &EvalGrid) -> Self {
        Self::build(table, &grid.text_lengths_ascending(), &grid.key_lengths_ascending())
    }

    /// Axes taken from whatever pairs the table holds.
    pub fn from_table(table: &ResultTable) -> Self {
        Self::build(table, &table.text_lengths(), &table.key_lengths())
    }

    pub fn rows(&self) -> usize {
        self.text_lengths.len()
    }

    pub fn cols(&self) -> usize {
        self.key_lengths.len()
    }

    /// Cell at (row, col); None outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row)?.get(col).copied()
    }

    /// (min, max) over all cells; (0, 0) when empty.
    pub fn value_range(&self) -> (f64, f64) {
        let mut it = self.cells.iter().flatten().copied();
        let Some(first) = it.next() else {
            return (0.0, 0.0);
        };
        it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// Map a cell value into [0, 1] over the data range. A flat grid maps to 0.5.
    pub fn normalized(&self, v: f64) -> f64 {
        let (lo, hi) = self.value_range();
        if hi - lo <= f64::EPSILON {
            return 0.5;
        }
        ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
    }
}
