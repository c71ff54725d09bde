//! Walletkit - a lightweight wallet connection manager for EVM chains.
//!
//! This crate manages the lifecycle of a wallet session: activating a named
//! connector, persisting the last-used connector for silent reconnection,
//! classifying activation failures, registering an unfamiliar network with
//! the wallet when needed, and deriving a display-ready session view.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing session services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "walletkit";
