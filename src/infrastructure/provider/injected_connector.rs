//! Injected-wallet connector adapter.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::domain::entities::{Address, ChainSpec, parse_hex_quantity};
use crate::domain::errors::WalletError;
use crate::domain::ports::{Activation, ConnectorPort, WalletProviderPort};

use super::HttpRpcProvider;

/// Registry name of the injected connector.
pub const INJECTED: &str = "injected";

/// Connector backed by a locally available wallet provider.
///
/// Activation requests account authorization and checks the wallet's chain
/// against the configured target. An absent provider is a reportable
/// condition, not a crash.
pub struct InjectedConnector {
    provider: Option<Arc<dyn WalletProviderPort>>,
    chain: ChainSpec,
}

impl InjectedConnector {
    /// Creates connector over an optional wallet provider.
    #[must_use]
    pub fn new(provider: Option<Arc<dyn WalletProviderPort>>, chain: ChainSpec) -> Self {
        Self { provider, chain }
    }

    fn provider(&self) -> Result<&Arc<dyn WalletProviderPort>, WalletError> {
        self.provider.as_ref().ok_or(WalletError::NoProvider)
    }

    async fn query_chain_id(
        &self,
        provider: &Arc<dyn WalletProviderPort>,
    ) -> Result<u64, WalletError> {
        let result = provider
            .request("eth_chainId", json!([]))
            .await
            .map_err(WalletError::classify)?;

        let quantity = result
            .as_str()
            .and_then(parse_hex_quantity)
            .ok_or_else(|| WalletError::unclassified("malformed chain id response"))?;

        if quantity.bits() > 64 {
            return Err(WalletError::unclassified("chain id exceeds 64 bits"));
        }

        Ok(quantity.low_u64())
    }
}

#[async_trait]
impl ConnectorPort for InjectedConnector {
    fn name(&self) -> &str {
        INJECTED
    }

    async fn activate(&self) -> Result<Activation, WalletError> {
        let provider = self.provider()?;

        debug!("Requesting account authorization from wallet");
        let accounts = provider
            .request("eth_requestAccounts", json!([]))
            .await
            .map_err(WalletError::classify)?;

        let account = accounts
            .get(0)
            .and_then(Value::as_str)
            .and_then(|s| Address::new(s))
            .ok_or_else(|| {
                warn!("Wallet returned no usable accounts");
                WalletError::unclassified("provider returned no accounts")
            })?;

        let chain_id = self.query_chain_id(provider).await?;
        if chain_id != self.chain.chain_id {
            return Err(WalletError::unsupported_chain(chain_id));
        }

        debug!(account = %account.short(), chain_id, "Wallet activation complete");

        Ok(Activation {
            account,
            chain_id,
            provider: Arc::new(HttpRpcProvider::new(Arc::clone(provider))),
        })
    }

    async fn deactivate(&self) {
        // The injected provider holds no revocable session; dropping local
        // state is the session service's job.
        debug!("Injected connector deactivated");
    }

    async fn current_chain_id(&self) -> Result<u64, WalletError> {
        let provider = self.provider()?;
        self.query_chain_id(provider).await
    }
}
