//! Superchain configuration types.

use alloc::string::String;

/// A superchain grouping record.
///
/// Every chain in the registry names the superchain it belongs to; the
/// superchain carries the L1 anchor shared by all member chains.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperchainConfig {
    /// Superchain name (e.g. "Mainnet")
    pub name: String,
    /// Superchain L1 anchor information
    pub l1: SuperchainL1Info,
}

/// Superchain L1 anchor information
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperchainL1Info {
    /// L1 chain ID
    #[cfg_attr(feature = "serde", serde(alias = "chainId"))]
    pub chain_id: u64,
    /// L1 chain public RPC endpoint
    #[cfg_attr(feature = "serde", serde(alias = "publicRPC"))]
    pub public_rpc: String,
    /// L1 chain explorer endpoint
    pub explorer: String,
}

/// Level of integration with the superchain.
#[derive(Debug, Default, Copy, Clone, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(u8)]
pub enum SuperchainLevel {
    /// Frontier chains are chains with customizations beyond the standard
    /// OP Stack configuration.
    #[default]
    Frontier = 0,
    /// A candidate to become a standard chain.
    StandardCandidate = 1,
    /// Standard chains don't deviate from the standard OP Stack
    /// configuration.
    Standard = 2,
}
