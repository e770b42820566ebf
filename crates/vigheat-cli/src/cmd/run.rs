// crates/vigheat-cli/src/cmd/run.rs

use anyhow::Context;
use clap::Args;
use tracing::info;
use vigheat_core::heatmap::text;
use vigheat_core::session::driver::run_session;
use vigheat_core::session::prompt::ConsolePrompt;
use vigheat_core::HeatmapGrid;

use crate::cmd::grid_args::GridArgs;
use crate::io::results_file;
use crate::render::svg;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Heatmap output path (.svg)
    #[arg(long, default_value = "vigenere_heatmap.svg")]
    pub out: String,

    /// Optional results export (.jsonl), one scored case per line
    #[arg(long)]
    pub results: Option<String>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let grid = args.grid.resolve()?;
    let mut rng = args.grid.rng();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompt = ConsolePrompt::new(stdin.lock(), stdout.lock());

    let table = run_session(&grid, &mut rng, &mut prompt).context("evaluation session")?;
    drop(prompt);

    if let Some(path) = &args.results {
        results_file::save(path, &table)?;
        info!(path = %path, entries = table.len(), "wrote results");
    }

    let heat = HeatmapGrid::from_grid(&table, &grid);
    println!();
    print!("{}", text::render(&heat));

    svg::render(&args.out, &heat)?;
    println!("heatmap written to {}", args.out);
    Ok(())
}
