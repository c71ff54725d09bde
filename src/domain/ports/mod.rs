mod connector_port;
mod rpc_provider_port;
mod selection_storage_port;
mod wallet_provider_port;

pub use connector_port::{Activation, ConnectorPort};
pub use rpc_provider_port::RpcProviderPort;
pub use selection_storage_port::{SELECTION_KEY, SelectionStoragePort};
pub use wallet_provider_port::WalletProviderPort;
