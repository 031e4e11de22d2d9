//! CLI frontend for Zhouyi, the three-coin oracle.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zy",
    about = "Zhouyi — an I Ching consultation engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full interactive consultation
    Consult {
        /// Reference data file (the 64-hexagram JSON dataset)
        #[arg(short, long, default_value = "canon.json")]
        data: PathBuf,

        /// Base URL of the oracle backend
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        api: String,

        /// RNG seed for reproducible casts (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Text-generation model identifier
        #[arg(short, long, default_value = zy_consult::DEFAULT_MODEL)]
        model: String,

        /// Cast each line automatically instead of flipping coins by hand
        #[arg(short, long)]
        auto: bool,

        /// Pause between tossing and recording a line, in milliseconds
        #[arg(long, default_value = "300")]
        pause_ms: u64,

        /// Request timeout for the backend, in seconds
        #[arg(long, default_value = "60")]
        timeout_secs: u64,
    },

    /// Cast a hexagram offline, without classification or interpretation
    Cast {
        /// Reference data file (the 64-hexagram JSON dataset)
        #[arg(short, long, default_value = "canon.json")]
        data: PathBuf,

        /// RNG seed for reproducible casts (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Look up a hexagram by its six-bit key
    Lookup {
        /// Six '1'/'0' characters, top line first
        key: String,

        /// Reference data file (the 64-hexagram JSON dataset)
        #[arg(short, long, default_value = "canon.json")]
        data: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Consult {
            data,
            api,
            seed,
            model,
            auto,
            pause_ms,
            timeout_secs,
        } => commands::consult::run(&data, &api, seed, &model, auto, pause_ms, timeout_secs).await,
        Commands::Cast { data, seed } => commands::cast::run(&data, seed),
        Commands::Lookup { key, data } => commands::lookup::run(&data, &key),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
