//! Registry inspection CLI.
//!
//! ## Usage
//!
//! ```sh
//! basalt chains
//! basalt resolve --chain mainnet/op
//! basalt resolve --chain 8453
//! ```

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{ChainsCommand, ResolveCommand};
use tracing_subscriber::filter::LevelFilter;

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Lists the chains available in the registry.
    Chains(ChainsCommand),
    /// Resolves the rollup configuration of a chain.
    Resolve(ResolveCommand),
}

/// The registry CLI.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (0-2)
    #[arg(long, short, action = ArgAction::Count)]
    pub v: u8,
    /// The subcommand to run.
    #[clap(subcommand)]
    pub subcommand: Commands,
}

impl Cli {
    /// Runs the CLI.
    pub fn run(self) -> Result<()> {
        init_tracing_subscriber(self.v)?;

        match self.subcommand {
            Commands::Chains(chains) => chains.run(),
            Commands::Resolve(resolve) => resolve.run(),
        }
    }
}

/// Initializes the tracing subscriber for the given verbosity count.
fn init_tracing_subscriber(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}

fn main() {
    if let Err(err) = Cli::parse().run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
