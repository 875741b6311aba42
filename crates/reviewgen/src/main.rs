use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rg_config::{LoggingConfig, ReviewGenConfig};
use reviewgen::tracing_init::init_tracing;

mod cmd_check;
mod cmd_gen;
mod cmd_stats;

#[derive(Parser)]
#[command(name = "reviewgen", about = "Synthetic product review + support ticket dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a JSONL dataset
    Gen {
        /// Path to a reviewgen.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of records (overrides config)
        #[arg(long)]
        count: Option<usize>,

        /// Output JSONL path (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// RNG seed for a reproducible dataset (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Do not print the sample record
        #[arg(long)]
        no_sample: bool,
    },
    /// Print summary statistics for an existing dataset
    Stats {
        /// Path to the JSONL dataset
        input: PathBuf,
    },
    /// Check every record of a dataset against the catalog and ticket rules
    Check {
        /// Path to the JSONL dataset
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen {
            config,
            count,
            out,
            seed,
            no_sample,
        } => {
            let mut config = match config {
                Some(path) => ReviewGenConfig::load(&path)?,
                None => ReviewGenConfig::default(),
            };
            if let Some(count) = count {
                config.generator.count = count;
            }
            if let Some(out) = out {
                config.generator.output = out;
            }
            if seed.is_some() {
                config.generator.seed = seed;
            }
            if no_sample {
                config.generator.sample = false;
            }

            let _guard = init_tracing(&config.logging)?;
            cmd_gen::run(&config.generator)
        }
        Commands::Stats { input } => {
            let _guard = init_tracing(&LoggingConfig::default())?;
            cmd_stats::run(&input)
        }
        Commands::Check { input } => {
            let _guard = init_tracing(&LoggingConfig::default())?;
            cmd_check::run(&input)
        }
    }
}
