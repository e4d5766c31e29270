//! Hardfork activation policy for registered chains.

use basalt_genesis::{BASE_GOERLI_CHAIN_ID, OP_GOERLI_CHAIN_ID};

/// Regolith activation overrides, keyed by chain ID.
///
/// The two Goerli testnets test-ran Bedrock and later upgraded to Regolith;
/// every other registered chain has Regolith enabled from genesis. Scheduling
/// an exception for a new chain is a data change here, not a code change.
pub const REGOLITH_OVERRIDES: &[(u64, u64)] = &[
    (OP_GOERLI_CHAIN_ID, 1679079600),
    (BASE_GOERLI_CHAIN_ID, 1683219600),
];

/// Returns the Regolith activation timestamp of the given chain ID, in
/// seconds since the Unix epoch.
///
/// Chains without an override entry activate Regolith at genesis (zero).
pub const fn regolith_activation(chain_id: u64) -> u64 {
    let mut i = 0;
    while i < REGOLITH_OVERRIDES.len() {
        if REGOLITH_OVERRIDES[i].0 == chain_id {
            return REGOLITH_OVERRIDES[i].1;
        }
        i += 1;
    }
    0
}
