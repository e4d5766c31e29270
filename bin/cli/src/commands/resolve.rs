//! Resolve Subcommand

use clap::Parser;
use tracing::debug;

/// The `resolve` Subcommand
///
/// Resolves the rollup configuration of a chain from the embedded registry
/// snapshot and prints it as JSON.
///
/// # Usage
///
/// ```sh
/// basalt resolve --chain <CHAIN_ID | IDENTIFIER>
/// ```
#[derive(Parser, Debug, Clone)]
#[command(about = "Resolves the rollup configuration of a chain")]
pub struct ResolveCommand {
    /// The chain to resolve: a chain ID or an identifier such as
    /// "mainnet/op".
    #[arg(long, short = 'c')]
    pub chain: String,
}

impl ResolveCommand {
    /// Runs the subcommand.
    pub fn run(self) -> anyhow::Result<()> {
        let chain_id = match self.chain.parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                basalt_registry::chain_by_ident(&self.chain)
                    .ok_or_else(|| anyhow::anyhow!("unknown chain identifier: {}", self.chain))?
                    .chain_id
            }
        };

        debug!(chain_id, "resolving rollup config");
        let config = basalt_registry::rollup_config(chain_id)?;
        println!("{}", serde_json::to_string_pretty(&config)?);
        Ok(())
    }
}
