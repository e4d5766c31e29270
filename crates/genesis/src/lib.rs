#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/basalt-rs/basalt/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod chain;
pub use chain::{
    BASE_GOERLI_CHAIN_ID, BASE_MAINNET_CHAIN_ID, BASE_SEPOLIA_CHAIN_ID, ChainConfig,
    OP_GOERLI_CHAIN_ID, OP_MAINNET_CHAIN_ID, OP_SEPOLIA_CHAIN_ID,
};

mod genesis;
pub use genesis::ChainGenesis;

mod system;
pub use system::SystemConfig;

mod superchain;
pub use superchain::{SuperchainConfig, SuperchainL1Info, SuperchainLevel};

mod addresses;
pub use addresses::AddressList;

mod rollup;
pub use rollup::{
    DEFAULT_BLOCK_TIME, DEFAULT_CHANNEL_TIMEOUT, DEFAULT_MAX_SEQUENCER_DRIFT,
    DEFAULT_SEQ_WINDOW_SIZE, RollupConfig,
};
