//! JSON-RPC 2.0 transport over HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use primitive_types::U256;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::domain::entities::{Address, parse_hex_quantity};
use crate::domain::errors::WalletError;
use crate::domain::ports::{RpcProviderPort, WalletProviderPort};

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

fn decode(response: JsonRpcResponse) -> Result<Value, WalletError> {
    if let Some(error) = response.error {
        return Err(WalletError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    response.result.ok_or_else(|| {
        WalletError::unclassified("JSON-RPC response carried neither result nor error")
    })
}

/// Wallet provider adapter speaking JSON-RPC 2.0 over HTTP.
pub struct HttpWalletProvider {
    client: Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl HttpWalletProvider {
    /// Creates new provider against the given endpoint.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, WalletError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                WalletError::unclassified(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        })
    }
}

#[async_trait]
impl WalletProviderPort for HttpWalletProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(method, id, "Issuing JSON-RPC request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, method, "JSON-RPC transport failure");
                if e.is_connect() || e.is_timeout() {
                    WalletError::NoProvider
                } else {
                    WalletError::unclassified(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, method, "JSON-RPC endpoint returned HTTP error");
            return Err(WalletError::unclassified(format!(
                "unexpected response: HTTP {status}"
            )));
        }

        let rpc_response: JsonRpcResponse = response.json().await.map_err(|e| {
            warn!(error = %e, method, "Failed to parse JSON-RPC response");
            WalletError::unclassified(format!("failed to parse response: {e}"))
        })?;

        decode(rpc_response)
    }
}

/// RPC provider handle bound to an active session.
pub struct HttpRpcProvider {
    provider: Arc<dyn WalletProviderPort>,
}

impl HttpRpcProvider {
    /// Creates balance provider over a raw wallet provider.
    #[must_use]
    pub fn new(provider: Arc<dyn WalletProviderPort>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RpcProviderPort for HttpRpcProvider {
    async fn get_balance(&self, address: &Address) -> Result<U256, WalletError> {
        let result = self
            .provider
            .request("eth_getBalance", json!([address.as_str(), "latest"]))
            .await?;

        let quantity = result
            .as_str()
            .ok_or_else(|| WalletError::unclassified("non-string balance result"))?;

        parse_hex_quantity(quantity).ok_or_else(|| {
            WalletError::unclassified(format!("malformed balance quantity: {quantity}"))
        })
    }
}
