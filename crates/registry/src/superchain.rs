//! Contains the registry tables and the resolution function.

use alloc::string::String;
use alloy_primitives::{Address, map::HashMap};
use basalt_genesis::{
    AddressList, ChainConfig, ChainGenesis, DEFAULT_BLOCK_TIME, DEFAULT_CHANNEL_TIMEOUT,
    DEFAULT_MAX_SEQUENCER_DRIFT, DEFAULT_SEQ_WINDOW_SIZE, RollupConfig, SuperchainConfig,
    SystemConfig,
};

use crate::{chain_list::ChainList, errors::RegistryError, hardforks::regolith_activation};

/// The registry containing the static chain metadata tables.
///
/// The tables are independent: each is keyed by chain ID, except the
/// superchain table which is keyed by the group name that chain entries
/// reference. All fields are public so tests and embedders can construct a
/// registry from fixture data instead of the embedded snapshot.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Registry {
    /// Chain summaries.
    pub chain_list: ChainList,
    /// Map of chain IDs to their chain configuration.
    pub op_chains: HashMap<u64, ChainConfig>,
    /// Map of superchain names to their configuration.
    pub superchains: HashMap<String, SuperchainConfig>,
    /// Map of chain IDs to their genesis system configuration.
    pub genesis_system_configs: HashMap<u64, SystemConfig>,
    /// Map of chain IDs to their contract address book.
    pub addresses: HashMap<u64, AddressList>,
}

impl Registry {
    /// Loads the registry from the embedded snapshot.
    pub fn from_embedded() -> Self {
        let chain_list = serde_json::from_str(include_str!("../etc/chainList.json"))
            .expect("Failed to read chain list");
        let op_chains = serde_json::from_str(include_str!("../etc/chains.json"))
            .expect("Failed to read chain configs");
        let superchains = serde_json::from_str(include_str!("../etc/superchains.json"))
            .expect("Failed to read superchain configs");
        let genesis_system_configs = serde_json::from_str(include_str!("../etc/genesis.json"))
            .expect("Failed to read genesis system configs");
        let addresses = serde_json::from_str(include_str!("../etc/addresses.json"))
            .expect("Failed to read address books");

        Self { chain_list, op_chains, superchains, genesis_system_configs, addresses }
    }

    /// Returns the [`ChainConfig`] of the given chain ID.
    pub fn chain_config(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.op_chains.get(&chain_id)
    }

    /// Returns the [`SuperchainConfig`] registered under the given name.
    pub fn superchain(&self, name: &str) -> Option<&SuperchainConfig> {
        self.superchains.get(name)
    }

    /// Returns the genesis [`SystemConfig`] of the given chain ID.
    pub fn genesis_system_config(&self, chain_id: u64) -> Option<&SystemConfig> {
        self.genesis_system_configs.get(&chain_id)
    }

    /// Returns the deposit contract address of the given chain ID.
    ///
    /// Absent both when the chain has no address book entry and when the
    /// entry has no recorded portal proxy.
    pub fn deposit_contract_address(&self, chain_id: u64) -> Option<Address> {
        self.addresses.get(&chain_id).and_then(|a| a.optimism_portal_proxy)
    }

    /// Resolves the [`RollupConfig`] of the given chain ID.
    ///
    /// Performs the four table lookups in order, short-circuiting on the
    /// first absent record, then assembles the configuration in one step.
    /// Re-invocation against the same registry always yields the same
    /// outcome.
    pub fn rollup_config(&self, chain_id: u64) -> Result<RollupConfig, RegistryError> {
        let chain =
            self.chain_config(chain_id).ok_or(RegistryError::UnknownChain(chain_id))?;

        let superchain = self.superchain(&chain.superchain).ok_or_else(|| {
            RegistryError::UnknownSuperchain {
                chain_id,
                superchain: chain.superchain.clone(),
            }
        })?;

        let genesis_system_config = self
            .genesis_system_config(chain_id)
            .copied()
            .ok_or(RegistryError::MissingGenesisSystemConfig(chain_id))?;

        let deposit_contract_address = self
            .deposit_contract_address(chain_id)
            .ok_or(RegistryError::MissingDepositContract(chain_id))?;

        Ok(RollupConfig {
            genesis: ChainGenesis {
                system_config: Some(genesis_system_config),
                ..chain.genesis
            },
            // The below parameters can differ per chain in principle, but no
            // registered chain varies them, so the registry does not carry
            // them yet. Custom deployments construct a `RollupConfig`
            // directly instead.
            block_time: DEFAULT_BLOCK_TIME,
            max_sequencer_drift: DEFAULT_MAX_SEQUENCER_DRIFT,
            seq_window_size: DEFAULT_SEQ_WINDOW_SIZE,
            channel_timeout: DEFAULT_CHANNEL_TIMEOUT,
            l1_chain_id: superchain.l1.chain_id,
            l2_chain_id: chain.chain_id,
            regolith_time: regolith_activation(chain_id),
            batch_inbox_address: chain.batch_inbox_addr,
            deposit_contract_address,
            l1_system_config_address: chain.system_config_addr,
        })
    }
}
