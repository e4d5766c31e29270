//! List of registered chains.

use alloc::{string::String, vec::Vec};

/// List of chains.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChainList {
    /// List of chains.
    pub chains: Vec<Chain>,
}

impl ChainList {
    /// Returns a [`Chain`] by its identifier, e.g. "mainnet/op".
    pub fn get_chain_by_ident(&self, identifier: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.identifier.eq_ignore_ascii_case(identifier))
    }

    /// Returns a [`Chain`] by its chain ID.
    pub fn get_chain_by_id(&self, chain_id: u64) -> Option<&Chain> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }

    /// Returns the number of chains in the list.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// A chain summary.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tabled", derive(tabled::Tabled))]
pub struct Chain {
    /// The name of the chain.
    #[cfg_attr(feature = "tabled", tabled(rename = "Name"))]
    pub name: String,
    /// Chain identifier.
    #[cfg_attr(feature = "tabled", tabled(rename = "Identifier"))]
    pub identifier: String,
    /// Chain ID.
    #[cfg_attr(feature = "tabled", tabled(rename = "Chain ID"))]
    pub chain_id: u64,
}
