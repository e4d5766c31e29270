//! OP Goerli rollup config.

use alloy_eips::BlockNumHash;
use alloy_primitives::{address, b256, uint};
use basalt_genesis::{ChainGenesis, RollupConfig, SystemConfig};

/// The [`RollupConfig`] for OP Goerli.
///
/// One of the two chains that ran Bedrock before Regolith was scheduled, so
/// its `regolith_time` is non-zero.
pub const OP_GOERLI_CONFIG: RollupConfig = RollupConfig {
    genesis: ChainGenesis {
        l1: BlockNumHash {
            hash: b256!("6ffc1bf3754c01f6bb9fe057c1578b87a8571ce2e9be5ca14bace6eccfd336c7"),
            number: 8300214,
        },
        l2: BlockNumHash {
            hash: b256!("0f783549ea4313b784eadd9b8e8a69913b368b7366363ea814d7707ac505175f"),
            number: 4061224,
        },
        l2_time: 1673550516,
        system_config: Some(SystemConfig {
            batcher_address: address!("7431310e026b69bfc676c0013e12a1a11411eec9"),
            overhead: uint!(0x834_U256),
            scalar: uint!(0xf4240_U256),
            gas_limit: 25000000,
        }),
    },
    block_time: 2,
    max_sequencer_drift: 600,
    seq_window_size: 3600,
    channel_timeout: 300,
    l1_chain_id: 5,
    l2_chain_id: 420,
    regolith_time: 1679079600,
    batch_inbox_address: address!("ff00000000000000000000000000000000000420"),
    deposit_contract_address: address!("5b47e1a08ea6d985d6649300584e6722ec4b1383"),
    l1_system_config_address: address!("ae851f927ee40de99aabb7461c00f9622ab91d60"),
};
