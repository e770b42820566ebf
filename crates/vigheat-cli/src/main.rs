// crates/vigheat-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "vigheat")]
#[command(about = "Vigenere decryption accuracy heatmap harness", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: show each ciphertext, collect accuracy, render heatmap
    Run(cmd::run::RunArgs),

    /// Print every generated case for a grid without prompting
    Plan(cmd::plan::PlanArgs),

    /// Encrypt text with a key
    Encrypt(cmd::cipher::CipherArgs),

    /// Decrypt text with a known key
    Decrypt(cmd::cipher::CipherArgs),

    /// Print a random lowercase key
    Keygen(cmd::keygen::KeygenArgs),

    /// Re-render a heatmap from a saved results file (.jsonl)
    Plot(cmd::plot::PlotArgs),
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Plan(args) => cmd::plan::run(args),
        Commands::Encrypt(args) => cmd::cipher::run_encrypt(args),
        Commands::Decrypt(args) => cmd::cipher::run_decrypt(args),
        Commands::Keygen(args) => cmd::keygen::run(args),
        Commands::Plot(args) => cmd::plot::run(args),
    }
}
