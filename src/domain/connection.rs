//! Connection state of the wallet session.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::Address;
use crate::domain::errors::WalletError;
use crate::domain::ports::RpcProviderPort;

/// Phase of the connection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionPhase {
    /// No account, no error.
    #[default]
    Idle,
    /// One connector is mid-activation.
    Activating,
    /// Active session with account, chain and provider populated.
    Connected,
    /// Activation failed; error populated.
    Failed,
}

/// Immutable snapshot of the session's working state.
///
/// Owned and mutated exclusively by the session service; every other
/// component observes snapshots. The `attempt` counter increases on every
/// login and logout, so a completion carrying a stale counter value can be
/// recognized and discarded.
#[derive(Clone, Default)]
pub struct ConnectionState {
    /// Current phase.
    pub phase: ConnectionPhase,
    /// Authenticated account, present while connected.
    pub account: Option<Address>,
    /// Chain id of the active session.
    pub chain_id: Option<u64>,
    /// Live RPC connection of the active session.
    pub provider: Option<Arc<dyn RpcProviderPort>>,
    /// Classified error of the last failed activation.
    pub error: Option<WalletError>,
    /// Name of the connector currently (or last) marked as activating.
    pub activating: Option<String>,
    /// Name of the connector the current phase belongs to.
    pub connector: Option<String>,
    /// Monotonically increasing login/logout counter.
    pub attempt: u64,
}

impl ConnectionState {
    /// Returns whether the session holds an active connection.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == ConnectionPhase::Connected
    }

    /// Returns whether the session is connected for the connector the
    /// caller most recently asked to activate.
    ///
    /// The double condition guards against a stale activation: if a second
    /// login started before a first one resolved, the connector marked as
    /// activating no longer matches the one the connection belongs to.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.phase == ConnectionPhase::Connected
            && self.activating.is_some()
            && self.activating == self.connector
    }

    /// Resets to `Idle`, keeping the attempt counter monotonic.
    pub fn reset(&mut self) {
        self.attempt += 1;
        self.phase = ConnectionPhase::Idle;
        self.account = None;
        self.chain_id = None;
        self.provider = None;
        self.error = None;
        self.activating = None;
        self.connector = None;
    }
}

impl fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionState")
            .field("phase", &self.phase)
            .field("account", &self.account)
            .field("chain_id", &self.chain_id)
            .field("provider", &self.provider.is_some())
            .field("error", &self.error)
            .field("activating", &self.activating)
            .field("connector", &self.connector)
            .field("attempt", &self.attempt)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        let state = ConnectionState::default();

        assert_eq!(state.phase, ConnectionPhase::Idle);
        assert!(!state.is_active());
        assert!(!state.is_connected());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_is_connected_requires_matching_connector() {
        let state = ConnectionState {
            phase: ConnectionPhase::Connected,
            activating: Some("injected".to_string()),
            connector: Some("injected".to_string()),
            ..Default::default()
        };

        assert!(state.is_connected());
    }

    #[test]
    fn test_stale_activation_is_not_connected() {
        // A second login superseded the one that produced this connection.
        let state = ConnectionState {
            phase: ConnectionPhase::Connected,
            activating: Some("walletconnect".to_string()),
            connector: Some("injected".to_string()),
            ..Default::default()
        };

        assert!(state.is_active());
        assert!(!state.is_connected());
    }

    #[test]
    fn test_reset_clears_everything_but_bumps_attempt() {
        let mut state = ConnectionState {
            phase: ConnectionPhase::Failed,
            error: Some(WalletError::UserRejected),
            activating: Some("injected".to_string()),
            connector: Some("injected".to_string()),
            chain_id: Some(97),
            attempt: 3,
            ..Default::default()
        };

        state.reset();

        assert_eq!(state.phase, ConnectionPhase::Idle);
        assert!(state.error.is_none());
        assert!(state.activating.is_none());
        assert!(state.connector.is_none());
        assert!(state.chain_id.is_none());
        assert_eq!(state.attempt, 4);
    }
}
