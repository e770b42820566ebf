// crates/vigheat-cli/src/cmd/plan.rs

use std::io::Write;

use clap::Args;
use vigheat_core::session::case::plan;

use crate::cmd::grid_args::GridArgs;

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Also print the plaintext sample for each case
    #[arg(long, default_value_t = false)]
    pub show_plaintext: bool,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let grid = args.grid.resolve()?;
    let mut rng = args.grid.rng();
    let cases = plan(&grid, &mut rng)?;

    let mut out = std::io::stdout().lock();
    for c in &cases {
        c.write_block(&mut out)?;
        if args.show_plaintext {
            writeln!(out, "Plaintext: {}", c.plaintext)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "cases = {}", cases.len())?;
    Ok(())
}
