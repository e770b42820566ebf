// crates/vigheat-cli/src/cmd/plot.rs

use clap::Args;
use tracing::warn;
use vigheat_core::heatmap::text;
use vigheat_core::HeatmapGrid;

use crate::io::results_file;
use crate::render::svg;

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Results file written by `run --results` (.jsonl)
    #[arg(long)]
    pub results: String,

    /// Heatmap output path (.svg)
    #[arg(long, default_value = "vigenere_heatmap.svg")]
    pub out: String,
}

pub fn run(args: PlotArgs) -> anyhow::Result<()> {
    let table = results_file::load(&args.results)?;
    if table.is_empty() {
        anyhow::bail!("no results in {}", args.results);
    }

    let heat = HeatmapGrid::from_table(&table);
    let expected = heat.rows() * heat.cols();
    if table.len() < expected {
        warn!(
            entries = table.len(),
            expected, "results do not cover the full grid; missing cells plot as 0.0"
        );
    }

    print!("{}", text::render(&heat));
    svg::render(&args.out, &heat)?;
    println!("heatmap written to {}", args.out);
    Ok(())
}
