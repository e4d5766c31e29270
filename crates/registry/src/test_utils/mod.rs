//! Hardcoded rollup configs used to pin the embedded registry snapshot.

mod op_mainnet;
pub use op_mainnet::OP_MAINNET_CONFIG;

mod base_mainnet;
pub use base_mainnet::BASE_MAINNET_CONFIG;

mod op_goerli;
pub use op_goerli::OP_GOERLI_CONFIG;

mod base_sepolia;
pub use base_sepolia::BASE_SEPOLIA_CONFIG;
