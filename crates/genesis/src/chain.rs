//! Contains the chain config type.

use alloc::string::String;
use alloy_primitives::Address;

use crate::{ChainGenesis, SuperchainLevel};

/// The OP Mainnet chain ID.
pub const OP_MAINNET_CHAIN_ID: u64 = 10;

/// The OP Goerli chain ID.
pub const OP_GOERLI_CHAIN_ID: u64 = 420;

/// The OP Sepolia chain ID.
pub const OP_SEPOLIA_CHAIN_ID: u64 = 11155420;

/// The Base Mainnet chain ID.
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

/// The Base Goerli chain ID.
pub const BASE_GOERLI_CHAIN_ID: u64 = 84531;

/// The Base Sepolia chain ID.
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

/// The static registry record of a single rollup chain.
///
/// One entry per chain ID in the registry's chain table. The `superchain`
/// field names the [`SuperchainConfig`][crate::SuperchainConfig] grouping the
/// chain belongs to; it is a reference by name, not an embedded record.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainConfig {
    /// Chain name (e.g. "Base")
    pub name: String,
    /// Chain ID
    pub chain_id: u64,
    /// Name of the superchain the chain is part of
    pub superchain: String,
    /// Chain public RPC endpoint
    pub public_rpc: String,
    /// Chain sequencer RPC endpoint
    pub sequencer_rpc: String,
    /// Chain explorer HTTP endpoint
    pub explorer: String,
    /// Level of integration with the superchain.
    #[cfg_attr(feature = "serde", serde(default))]
    pub superchain_level: SuperchainLevel,
    /// Chain-specific batch inbox address on L1
    pub batch_inbox_addr: Address,
    /// The L1 address the chain's system config contract is deployed at
    pub system_config_addr: Address,
    /// Chain-specific genesis information
    pub genesis: ChainGenesis,
}
