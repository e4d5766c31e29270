//! Commands for the registry CLI.

mod chains;
pub use chains::ChainsCommand;

mod resolve;
pub use resolve::ResolveCommand;
