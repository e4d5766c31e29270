//! Contains the [`RollupConfig`] type.

use alloy_primitives::Address;

use crate::ChainGenesis;

/// The block time of registered chains, in seconds.
pub const DEFAULT_BLOCK_TIME: u64 = 2;

/// The maximum number of seconds a sequencer batch may land after the L1
/// timestamp of the sequencing window end.
pub const DEFAULT_MAX_SEQUENCER_DRIFT: u64 = 600;

/// The sequencing window size of registered chains, in L1 blocks.
pub const DEFAULT_SEQ_WINDOW_SIZE: u64 = 3600;

/// Number of L1 blocks between when a channel can be opened and when it must
/// be closed.
pub const DEFAULT_CHANNEL_TIMEOUT: u64 = 300;

/// The resolved rollup configuration of a chain.
///
/// Everything a rollup node needs to validate and derive its chain from L1,
/// assembled from the registry's tables. Constructed atomically by
/// resolution; never partially populated.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollupConfig {
    /// The genesis state of the rollup, including its genesis system
    /// configuration.
    pub genesis: ChainGenesis,
    /// The block time of the L2, in seconds.
    pub block_time: u64,
    /// Sequencer batches may not be more than `max_sequencer_drift` seconds
    /// after the L1 timestamp of the sequencing window end.
    ///
    /// Note: when L1 has many 1 second consecutive blocks, and L2 grows at
    /// fixed 2 seconds, the L2 time may still grow beyond this difference.
    pub max_sequencer_drift: u64,
    /// The sequencing window size.
    pub seq_window_size: u64,
    /// Number of L1 blocks between when a channel can be opened and when it
    /// must be closed.
    pub channel_timeout: u64,
    /// The L1 chain ID.
    pub l1_chain_id: u64,
    /// The L2 chain ID.
    pub l2_chain_id: u64,
    /// The activation time of the Regolith network upgrade, in seconds since
    /// the Unix epoch. Zero means active since genesis.
    pub regolith_time: u64,
    /// The L1 address that batches are sent to.
    pub batch_inbox_address: Address,
    /// The L1 address that deposits are sent to.
    pub deposit_contract_address: Address,
    /// The L1 address that the system config is stored at.
    pub l1_system_config_address: Address,
}

impl RollupConfig {
    /// Returns true if Regolith is active at the given L2 block timestamp.
    pub const fn is_regolith_active(&self, timestamp: u64) -> bool {
        timestamp >= self.regolith_time
    }
}
