//! RPC provider port definition.

use async_trait::async_trait;
use primitive_types::U256;

use crate::domain::entities::Address;
use crate::domain::errors::WalletError;

/// Port for queries against the live RPC connection of an activated session.
///
/// Balances are opaque big integers in the chain's base unit.
#[async_trait]
pub trait RpcProviderPort: Send + Sync {
    /// Queries the native balance of an account.
    async fn get_balance(&self, address: &Address) -> Result<U256, WalletError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock RPC provider for testing.
    pub struct MockRpcProvider {
        outcome: Mutex<Result<U256, WalletError>>,
        calls: AtomicUsize,
    }

    impl MockRpcProvider {
        /// Creates mock answering every query with the given balance.
        pub fn with_balance(balance: U256) -> Self {
            Self {
                outcome: Mutex::new(Ok(balance)),
                calls: AtomicUsize::new(0),
            }
        }

        /// Creates mock failing every query.
        pub fn failing() -> Self {
            Self {
                outcome: Mutex::new(Err(WalletError::unclassified("mock rpc failure"))),
                calls: AtomicUsize::new(0),
            }
        }

        /// Replaces the scripted outcome.
        pub fn set_balance(&self, balance: U256) {
            *self.outcome.lock().unwrap() = Ok(balance);
        }

        /// Returns how many balance queries were issued.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RpcProviderPort for MockRpcProvider {
        async fn get_balance(&self, _address: &Address) -> Result<U256, WalletError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.lock().unwrap().clone()
        }
    }
}
