//! Address types.

use alloy_primitives::Address;

/// The set of network-specific contract addresses recorded for a chain.
///
/// The registry publishes the full address book per chain; resolution only
/// consumes the `OptimismPortalProxy` (the deposit contract). The remaining
/// entries are carried verbatim for downstream tooling.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct AddressList {
    /// The address manager
    pub address_manager: Option<Address>,
    /// L1 Cross Domain Messenger proxy address
    pub l1_cross_domain_messenger_proxy: Option<Address>,
    /// L1 ERC721 Bridge proxy address
    #[cfg_attr(feature = "serde", serde(alias = "L1ERC721BridgeProxy"))]
    pub l1_erc721_bridge_proxy: Option<Address>,
    /// L1 Standard Bridge proxy address
    pub l1_standard_bridge_proxy: Option<Address>,
    /// L2 Output Oracle proxy address
    pub l2_output_oracle_proxy: Option<Address>,
    /// Optimism Mintable ERC20 Factory proxy address
    #[cfg_attr(feature = "serde", serde(alias = "OptimismMintableERC20FactoryProxy"))]
    pub optimism_mintable_erc20_factory_proxy: Option<Address>,
    /// Optimism Portal proxy address, the deposit contract on L1
    pub optimism_portal_proxy: Option<Address>,
    /// System Config proxy address
    pub system_config_proxy: Option<Address>,
    /// Proxy Admin address
    pub proxy_admin: Option<Address>,
}
