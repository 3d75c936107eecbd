//! vocabtrainer CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "vocabtrainer", version, about = "Terminal vocabulary quiz trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive training session
    Train {
        /// Vocabulary file (.csv-style text or .toml)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Words asked per training cycle
        #[arg(long)]
        cycle_length: Option<usize>,

        /// Seed for a reproducible word order
        #[arg(long)]
        seed: Option<u64>,

        /// Statistics format: table, json, plain
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a vocabulary file for problems
    Validate {
        /// Vocabulary file to check
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example vocabulary
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vocabtrainer=warn,vocabtrainer_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Train {
            vocabulary,
            cycle_length,
            seed,
            format,
            config,
        } => commands::train::execute(vocabulary, cycle_length, seed, format, config),
        Commands::Validate { vocabulary, config } => {
            commands::validate::execute(vocabulary, config)
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
