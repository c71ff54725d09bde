//! Domain error types.

mod storage_error;
mod wallet_error;

pub use storage_error::StorageError;
pub use wallet_error::WalletError;
