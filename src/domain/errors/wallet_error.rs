//! Wallet connection error taxonomy.

use thiserror::Error;

/// EIP-1193 error code for a user-rejected request.
const CODE_USER_REJECTED: i64 = 4001;
/// EIP-3085/EIP-3326 error code for a chain the wallet does not know.
const CODE_UNRECOGNIZED_CHAIN: i64 = 4902;

/// Wallet connection error variants.
///
/// `Clone` so errors can live inside broadcast state snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum WalletError {
    #[error("no wallet provider detected")]
    NoProvider,

    #[error("wallet is on an unsupported chain")]
    UnsupportedChain { chain_id: Option<u64> },

    #[error("user rejected the authorization request")]
    UserRejected,

    #[error("unknown connector: {name}")]
    UnknownConnector { name: String },

    #[error("provider error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("unclassified wallet error: {message}")]
    Unclassified { message: String },
}

impl WalletError {
    /// Creates unsupported-chain error for the observed chain id.
    #[must_use]
    pub const fn unsupported_chain(chain_id: u64) -> Self {
        Self::UnsupportedChain {
            chain_id: Some(chain_id),
        }
    }

    /// Creates unknown-connector error.
    #[must_use]
    pub fn unknown_connector(name: impl Into<String>) -> Self {
        Self::UnknownConnector { name: name.into() }
    }

    /// Creates unclassified error.
    #[must_use]
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::Unclassified {
            message: message.into(),
        }
    }

    /// Resolves raw provider error codes into taxonomy variants.
    ///
    /// Codes follow EIP-1193 and the MetaMask JSON-RPC conventions; anything
    /// unrecognized collapses to [`WalletError::Unclassified`].
    #[must_use]
    pub fn classify(self) -> Self {
        match self {
            Self::Rpc { code, message } => match code {
                CODE_USER_REJECTED => Self::UserRejected,
                CODE_UNRECOGNIZED_CHAIN => Self::UnsupportedChain { chain_id: None },
                _ => Self::Unclassified {
                    message: format!("provider error {code}: {message}"),
                },
            },
            other => other,
        }
    }

    /// Returns the fixed instructional message shown to the user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoProvider => {
                "No wallet browser extension detected, install MetaMask on desktop \
                 or visit from a dApp browser on mobile."
            }
            Self::UnsupportedChain { .. } => "You're connected to an unsupported network.",
            Self::UserRejected => "Please authorize this website to access your account.",
            Self::UnknownConnector { .. } => "The connector configuration is wrong.",
            Self::Rpc { .. } | Self::Unclassified { .. } => {
                "An unknown error occurred. Check the logs for more details."
            }
        }
    }

    /// Returns whether this error means the wallet sits on the wrong chain.
    #[must_use]
    pub const fn is_unsupported_chain(&self) -> bool {
        matches!(self, Self::UnsupportedChain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_user_rejected_code() {
        let error = WalletError::Rpc {
            code: 4001,
            message: "User rejected the request.".to_string(),
        };

        assert_eq!(error.classify(), WalletError::UserRejected);
    }

    #[test]
    fn test_classify_unrecognized_chain_code() {
        let error = WalletError::Rpc {
            code: 4902,
            message: "Unrecognized chain ID.".to_string(),
        };

        assert!(error.classify().is_unsupported_chain());
    }

    #[test]
    fn test_classify_unknown_code_is_unclassified() {
        let error = WalletError::Rpc {
            code: -32603,
            message: "Internal error".to_string(),
        };

        let classified = error.classify();
        assert!(matches!(classified, WalletError::Unclassified { .. }));
    }

    #[test]
    fn test_classify_preserves_taxonomy_variants() {
        assert_eq!(WalletError::NoProvider.classify(), WalletError::NoProvider);
        assert_eq!(
            WalletError::UserRejected.classify(),
            WalletError::UserRejected
        );
    }

    #[test]
    fn test_user_messages_are_fixed() {
        assert!(WalletError::NoProvider.user_message().contains("MetaMask"));
        assert_eq!(
            WalletError::unsupported_chain(56).user_message(),
            "You're connected to an unsupported network."
        );
        assert_eq!(
            WalletError::UserRejected.user_message(),
            "Please authorize this website to access your account."
        );
    }
}
