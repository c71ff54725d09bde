//! Connector port definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Address;
use crate::domain::errors::WalletError;
use crate::domain::ports::RpcProviderPort;

/// Result of a successful activation handshake.
#[derive(Clone)]
pub struct Activation {
    /// Authenticated account address.
    pub account: Address,
    /// Chain id the wallet is connected to.
    pub chain_id: u64,
    /// Live RPC connection bound to the session.
    pub provider: Arc<dyn RpcProviderPort>,
}

impl std::fmt::Debug for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activation")
            .field("account", &self.account.short())
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

/// Port for one named wallet authentication method.
///
/// Connectors are constructed once at startup, are immutable and shared by
/// reference for the lifetime of the process.
#[async_trait]
pub trait ConnectorPort: Send + Sync {
    /// Unique registry name of this connector.
    fn name(&self) -> &str;

    /// Runs the asynchronous activation handshake.
    async fn activate(&self) -> Result<Activation, WalletError>;

    /// Tears down any connector-held session state.
    async fn deactivate(&self);

    /// Queries the chain the wallet currently sits on.
    async fn current_chain_id(&self) -> Result<u64, WalletError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

    use primitive_types::U256;

    use crate::domain::ports::mocks::MockRpcProvider;

    /// Mock connector with a scripted queue of activation outcomes.
    ///
    /// An empty queue yields a default successful activation, so tests only
    /// script the failures they care about.
    pub struct MockConnector {
        name: String,
        outcomes: Mutex<VecDeque<Result<Activation, WalletError>>>,
        attempts: AtomicUsize,
        deactivations: AtomicUsize,
        chain_id: AtomicU64,
    }

    impl MockConnector {
        /// Creates mock connector sitting on chain 97.
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                outcomes: Mutex::new(VecDeque::new()),
                attempts: AtomicUsize::new(0),
                deactivations: AtomicUsize::new(0),
                chain_id: AtomicU64::new(97),
            }
        }

        /// Builds a default successful activation result.
        pub fn ok_activation(chain_id: u64) -> Activation {
            Activation {
                account: Address::new_unchecked(format!("0x{}", "ab".repeat(20))),
                chain_id,
                provider: Arc::new(MockRpcProvider::with_balance(U256::from(
                    1_000_000_000_000_000_000u128,
                ))),
            }
        }

        /// Queues an activation outcome.
        pub fn push_outcome(&self, outcome: Result<Activation, WalletError>) {
            self.outcomes.lock().unwrap().push_back(outcome);
        }

        /// Sets the chain id reported by `current_chain_id`.
        pub fn set_chain_id(&self, chain_id: u64) {
            self.chain_id.store(chain_id, Ordering::SeqCst);
        }

        /// Returns how many activations were attempted.
        pub fn attempts(&self) -> usize {
            self.attempts.load(Ordering::SeqCst)
        }

        /// Returns how many times the connector was deactivated.
        pub fn deactivations(&self) -> usize {
            self.deactivations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ConnectorPort for MockConnector {
        fn name(&self) -> &str {
            &self.name
        }

        async fn activate(&self) -> Result<Activation, WalletError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Self::ok_activation(self.chain_id.load(Ordering::SeqCst))))
        }

        async fn deactivate(&self) {
            self.deactivations.fetch_add(1, Ordering::SeqCst);
        }

        async fn current_chain_id(&self) -> Result<u64, WalletError> {
            Ok(self.chain_id.load(Ordering::SeqCst))
        }
    }
}
