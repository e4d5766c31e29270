//! Errors surfaced while resolving a rollup configuration.

use alloc::string::String;

/// Errors that may occur while resolving a [`RollupConfig`][rc] from the
/// registry.
///
/// Every variant is terminal for the call: the cause is static data absence,
/// so callers should treat the chain as unusable rather than retry.
///
/// [rc]: basalt_genesis::RollupConfig
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The chain ID has no entry in the chain table.
    #[error("unknown chain ID: {0}")]
    UnknownChain(u64),
    /// The chain entry references a superchain absent from the superchain
    /// table, an inconsistency in the registry itself.
    #[error("chain {chain_id} specifies unknown superchain: {superchain:?}")]
    UnknownSuperchain {
        /// The chain whose entry names the missing superchain.
        chain_id: u64,
        /// The superchain name with no record.
        superchain: String,
    },
    /// No genesis system config is recorded for the chain ID.
    #[error("unable to retrieve genesis system config of chain {0}")]
    MissingGenesisSystemConfig(u64),
    /// No deposit contract address is recorded for the chain ID.
    #[error("unable to retrieve deposit contract address of chain {0}")]
    MissingDepositContract(u64),
}
