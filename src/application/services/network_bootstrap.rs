//! One-shot network registration against the wallet provider.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::ChainSpec;
use crate::domain::ports::WalletProviderPort;

/// Asks the wallet provider to register a chain it does not know yet.
///
/// Advisory: every failure collapses to `false` and the caller owns any
/// retry policy. This service never retries on its own.
pub struct NetworkBootstrap {
    provider: Option<Arc<dyn WalletProviderPort>>,
}

impl NetworkBootstrap {
    /// Creates bootstrap over an optional wallet provider.
    #[must_use]
    pub fn new(provider: Option<Arc<dyn WalletProviderPort>>) -> Self {
        Self { provider }
    }

    /// Requests registration of the target chain via `wallet_addEthereumChain`.
    ///
    /// Returns `false` when the provider is absent, rejects the request or
    /// answers with an error.
    pub async fn ensure_chain(&self, chain: &ChainSpec) -> bool {
        let Some(provider) = &self.provider else {
            warn!(
                chain_id = chain.chain_id,
                "Cannot register chain: no wallet provider available"
            );
            return false;
        };

        let params = json!([chain.add_chain_params()]);

        match provider.request("wallet_addEthereumChain", params).await {
            Ok(_) => {
                debug!(chain_id = chain.chain_id, "Chain registered with wallet");
                true
            }
            Err(e) => {
                warn!(error = %e, chain_id = chain.chain_id, "Failed to register chain with wallet");
                false
            }
        }
    }
}
