//! Chains Subcommand

use clap::Parser;

/// The `chains` Subcommand
///
/// Lists the chains available in the embedded registry snapshot.
///
/// # Usage
///
/// ```sh
/// basalt chains
/// ```
#[derive(Parser, Debug, Clone)]
#[command(about = "Lists the chains available in the registry")]
pub struct ChainsCommand {}

impl ChainsCommand {
    /// Runs the subcommand.
    pub fn run(self) -> anyhow::Result<()> {
        let chains = basalt_registry::CHAINS.chains.clone();
        let mut table = tabled::Table::new(chains);
        table.with(tabled::settings::Style::modern());
        table.modify(
            tabled::settings::object::Columns::first(),
            tabled::settings::Alignment::right(),
        );
        println!("{}", table);
        Ok(())
    }
}
