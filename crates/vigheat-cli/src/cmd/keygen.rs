// crates/vigheat-cli/src/cmd/keygen.rs

use clap::Args;
use vigheat_core::random_key;

use crate::cmd::grid_args::make_rng;

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Key length in letters
    #[arg(long)]
    pub len: usize,

    /// RNG seed. If omitted, seeded from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: KeygenArgs) -> anyhow::Result<()> {
    let mut rng = make_rng(args.seed);
    println!("{}", random_key(&mut rng, args.len));
    Ok(())
}
