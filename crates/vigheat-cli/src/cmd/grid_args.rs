// crates/vigheat-cli/src/cmd/grid_args.rs
//
// Grid selection shared by `run` and `plan`.
// Precedence: built-in default < --grid file < individual flags.

use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use vigheat_core::grid::defaults::default_grid;
use vigheat_core::grid::grid::{parse_key_lengths, parse_text_lengths};
use vigheat_core::validate::{normalize_plaintext, validate_grid};
use vigheat_core::EvalGrid;

use crate::io::grid_file;

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Grid config (.toml). If omitted, uses the built-in default grid.
    #[arg(long)]
    pub grid: Option<String>,

    /// Override the source text (must be lowercase unless --normalize)
    #[arg(long)]
    pub text: Option<String>,

    /// Override text lengths, e.g. "15,25,40,55,70,full"
    #[arg(long)]
    pub text_lengths: Option<String>,

    /// Override key lengths, e.g. "2,3,4" or "2..=8"
    #[arg(long)]
    pub key_lengths: Option<String>,

    /// Lowercase the source text before validating it
    #[arg(long, default_value_t = false)]
    pub normalize: bool,

    /// RNG seed for key generation. If omitted, keys are seeded from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GridArgs {
    pub fn resolve(&self) -> anyhow::Result<EvalGrid> {
        let mut g = match &self.grid {
            Some(path) => grid_file::load(path)?,
            None => default_grid(),
        };

        if let Some(t) = &self.text {
            g.source_text = t.clone();
        }
        if let Some(s) = &self.text_lengths {
            g.text_lengths = parse_text_lengths(s).context("parse --text-lengths")?;
        }
        if let Some(s) = &self.key_lengths {
            g.key_lengths = parse_key_lengths(s).context("parse --key-lengths")?;
        }
        if self.normalize {
            g.source_text = normalize_plaintext(&g.source_text);
        }

        validate_grid(&g).context("invalid grid")?;
        info!(
            text_lengths = ?g.text_lengths_ascending(),
            key_lengths = ?g.key_lengths_ascending(),
            "grid resolved"
        );
        Ok(g)
    }

    pub fn rng(&self) -> StdRng {
        make_rng(self.seed)
    }
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
