//! Display-ready session view.

use crate::domain::connection::ConnectionState;
use crate::domain::entities::Address;
use crate::domain::errors::WalletError;

/// Derived, non-authoritative view of the session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    /// Whether the session is connected for the requested connector.
    pub is_connected: bool,
    /// Formatted native balance, empty when unknown.
    pub balance: String,
    /// Chain id of the active session.
    pub chain_id: Option<u64>,
    /// Authenticated account.
    pub account: Option<Address>,
    /// Fixed instructional message of the last activation failure.
    pub error_message: Option<&'static str>,
}

impl SessionView {
    /// Builds a view from a state snapshot and an already-formatted balance.
    #[must_use]
    pub fn from_state(state: &ConnectionState, balance: String) -> Self {
        Self {
            is_connected: state.is_connected(),
            balance,
            chain_id: state.chain_id,
            account: state.account.clone(),
            error_message: state.error.as_ref().map(WalletError::user_message),
        }
    }
}
