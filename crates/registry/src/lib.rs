#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/basalt-rs/basalt/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::{string::String, vec::Vec};
pub use alloy_primitives::map::{DefaultHashBuilder, HashMap};
pub use basalt_genesis::{ChainConfig, RollupConfig};

pub mod chain_list;
pub use chain_list::{Chain, ChainList};

pub mod errors;
pub use errors::RegistryError;

pub mod hardforks;
pub use hardforks::{REGOLITH_OVERRIDES, regolith_activation};

pub mod superchain;
pub use superchain::Registry;

#[cfg(test)]
pub mod test_utils;

lazy_static::lazy_static! {
    /// Private initializer that loads the embedded registry snapshot.
    static ref REGISTRY: Registry = Registry::from_embedded();

    /// Chain summaries exported from the registry.
    pub static ref CHAINS: ChainList = REGISTRY.chain_list.clone();

    /// Chain configurations exported from the registry.
    pub static ref OPCHAINS: HashMap<u64, ChainConfig, DefaultHashBuilder> = REGISTRY.op_chains.clone();
}

/// Resolves the [`RollupConfig`] of the given chain ID from the embedded
/// registry snapshot.
pub fn rollup_config(chain_id: u64) -> Result<RollupConfig, RegistryError> {
    REGISTRY.rollup_config(chain_id)
}

/// Returns all available [`Chain`] identifiers.
pub fn chain_idents() -> Vec<String> {
    CHAINS.chains.iter().map(|c| c.identifier.clone()).collect()
}

/// Returns a [`Chain`] by its identifier.
pub fn chain_by_ident(ident: &str) -> Option<&Chain> {
    CHAINS.get_chain_by_ident(ident)
}

/// Resolves a [`RollupConfig`] by chain identifier.
pub fn rollup_config_by_ident(ident: &str) -> Option<RollupConfig> {
    let chain_id = chain_by_ident(ident)?.chain_id;
    rollup_config(chain_id).ok()
}
