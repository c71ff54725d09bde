//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Wallet and RPC provider adapters.
pub mod provider;
/// Selection storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, LogLevel};
pub use provider::{HttpRpcProvider, HttpWalletProvider, InjectedConnector};
pub use storage::FileSelectionStorage;
