// crates/vigheat-core/src/heatmap/text.rs
//
// Plain-text rendering of a HeatmapGrid for the console.

use std::fmt::{self, Write};

use crate::heatmap::grid::HeatmapGrid;
use crate::heatmap::{TITLE, X_LABEL, Y_LABEL};

const CELL_W: usize = 7;

pub fn render(h: &HeatmapGrid) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    if write_table(&mut s, h).is_err() {
        s.clear();
    }
    s
}

pub fn write_table<W: Write>(out: &mut W, h: &HeatmapGrid) -> fmt::Result {
    let cw = CELL_W;
    let row_w = Y_LABEL.len().max(
        h.text_lengths
            .iter()
            .map(|n| n.to_string().len())
            .max()
            .unwrap_or(0),
    );

    writeln!(out, "{TITLE}")?;
    writeln!(out, "{:>row_w$} | {X_LABEL}", "")?;
    write!(out, "{:>row_w$} |", Y_LABEL)?;
    for kl in &h.key_lengths {
        write!(out, "{kl:>cw$}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(row_w + 2 + cw * h.cols()))?;

    for (tl, row) in h.text_lengths.iter().zip(&h.cells) {
        write!(out, "{tl:>row_w$} |")?;
        for v in row {
            write!(out, "{v:>cw$.1}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
