//! Wallet provider port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::WalletError;

/// Port for the raw request surface of a wallet provider (EIP-1193 shape).
#[async_trait]
pub trait WalletProviderPort: Send + Sync {
    /// Issues a JSON-RPC request against the wallet provider.
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// Mock wallet provider with per-method scripted responses.
    ///
    /// Each scripted response is consumed once; an unscripted call fails,
    /// which makes "succeeds exactly once" scenarios straightforward.
    #[derive(Default)]
    pub struct MockWalletProvider {
        responses: Mutex<HashMap<String, VecDeque<Result<Value, WalletError>>>>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl MockWalletProvider {
        /// Creates mock with no scripted responses.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response for the given method.
        pub fn script(&self, method: &str, response: Result<Value, WalletError>) {
            self.responses
                .lock()
                .unwrap()
                .entry(method.to_string())
                .or_default()
                .push_back(response);
        }

        /// Returns recorded calls as (method, params) pairs.
        pub fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }

        /// Returns how many times the given method was requested.
        pub fn call_count(&self, method: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|(m, _)| m == method)
                .count()
        }
    }

    #[async_trait]
    impl WalletProviderPort for MockWalletProvider {
        async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
            self.calls
                .lock()
                .unwrap()
                .push((method.to_string(), params));

            self.responses
                .lock()
                .unwrap()
                .get_mut(method)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| {
                    Err(WalletError::unclassified(format!(
                        "unscripted method: {method}"
                    )))
                })
        }
    }
}
