//! Domain layer with core business entities and port definitions.

/// Connection state definitions.
pub mod connection;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Connector registry.
pub mod registry;

pub use connection::{ConnectionPhase, ConnectionState};
pub use entities::{Address, ChainSpec, NativeCurrency};
pub use errors::{StorageError, WalletError};
pub use ports::{
    Activation, ConnectorPort, RpcProviderPort, SelectionStoragePort, WalletProviderPort,
};
pub use registry::ConnectorRegistry;
