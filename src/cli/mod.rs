mod bench;
mod verify;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exhaustively verify a ranking table against the known 7-card hand
    /// distribution.
    Verify {
        /// Path to the evaluator's backing ranking table.
        #[arg(long)]
        lut: PathBuf,
    },
    /// Time a bulk evaluation pass over randomly sampled distinct hands.
    Bench {
        /// Path to the evaluator's backing ranking table.
        #[arg(long)]
        lut: PathBuf,
        /// Number of distinct hands to sample.
        #[arg(long, default_value_t = 1_000_000)]
        hands: usize,
        /// RNG seed; defaults to entropy.
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify { lut } => verify::run_verify(&lut),
        Commands::Bench { lut, hands, seed } => bench::run_bench(&lut, hands, seed),
    }
}
