//! Target chain metadata and the `wallet_addEthereumChain` payload.

use serde::{Deserialize, Serialize};

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Currency display name.
    pub name: String,
    /// Currency ticker symbol.
    pub symbol: String,
    /// Number of implied decimals in the base unit.
    pub decimals: u8,
}

/// Static description of the chain a session must be connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSpec {
    /// Numeric chain id.
    pub chain_id: u64,
    /// Chain display name.
    pub name: String,
    /// Native currency metadata.
    pub currency: NativeCurrency,
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Block explorer URL.
    pub explorer_url: String,
    /// Provider polling interval in milliseconds.
    pub polling_interval_ms: u64,
}

/// Parameters object for the EIP-3085 `wallet_addEthereumChain` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    /// Chain id as a 0x-prefixed hex quantity.
    pub chain_id: String,
    /// Chain display name.
    pub chain_name: String,
    /// Native currency metadata.
    pub native_currency: NativeCurrency,
    /// Candidate RPC endpoints.
    pub rpc_urls: Vec<String>,
    /// Candidate block explorers.
    pub block_explorer_urls: Vec<String>,
}

impl ChainSpec {
    /// Default polling interval for the underlying provider.
    pub const DEFAULT_POLLING_INTERVAL_MS: u64 = 12_000;

    /// Returns the BSC testnet chain description, the default target.
    #[must_use]
    pub fn bsc_testnet() -> Self {
        Self {
            chain_id: 97,
            name: "Binance Smart Chain Testnet".to_string(),
            currency: NativeCurrency {
                name: "BNB".to_string(),
                symbol: "bnb".to_string(),
                decimals: 18,
            },
            rpc_url: "https://data-seed-prebsc-1-s1.binance.org:8545".to_string(),
            explorer_url: "https://testnet.bscscan.com/".to_string(),
            polling_interval_ms: Self::DEFAULT_POLLING_INTERVAL_MS,
        }
    }

    /// Returns the chain id as a 0x-prefixed hex quantity.
    #[must_use]
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }

    /// Builds the `wallet_addEthereumChain` parameters object.
    #[must_use]
    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.chain_id_hex(),
            chain_name: self.name.clone(),
            native_currency: self.currency.clone(),
            rpc_urls: vec![self.rpc_url.clone()],
            block_explorer_urls: vec![self.explorer_url.clone()],
        }
    }
}
