//! Wallet and RPC provider adapters.

/// JSON-RPC transport over HTTP.
pub mod http_provider;
/// Injected-wallet connector adapter.
pub mod injected_connector;

pub use http_provider::{HttpRpcProvider, HttpWalletProvider};
pub use injected_connector::InjectedConnector;
