//! Wallet connection state machine.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::domain::connection::{ConnectionPhase, ConnectionState};
use crate::domain::entities::ChainSpec;
use crate::domain::errors::WalletError;
use crate::domain::ports::{Activation, ConnectorPort, SELECTION_KEY, SelectionStoragePort};
use crate::domain::registry::ConnectorRegistry;

use super::NetworkBootstrap;

/// Orchestrates activation, deactivation and failure classification for the
/// wallet session.
///
/// Sole owner and mutator of [`ConnectionState`]; observers receive
/// immutable snapshots through a watch channel. Login and logout are
/// serialized, so an activation always completes before the next call on
/// the session is processed.
pub struct WalletSession {
    registry: Arc<ConnectorRegistry>,
    storage: Arc<dyn SelectionStoragePort>,
    bootstrap: NetworkBootstrap,
    chain: ChainSpec,
    gate: Mutex<()>,
    state_tx: watch::Sender<ConnectionState>,
}

impl WalletSession {
    /// Creates a session over an explicitly constructed context.
    #[must_use]
    pub fn new(
        registry: Arc<ConnectorRegistry>,
        storage: Arc<dyn SelectionStoragePort>,
        bootstrap: NetworkBootstrap,
        chain: ChainSpec,
    ) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::default());
        Self {
            registry,
            storage,
            bootstrap,
            chain,
            gate: Mutex::new(()),
            state_tx,
        }
    }

    /// Returns the connector registry backing this session.
    #[must_use]
    pub fn registry(&self) -> &ConnectorRegistry {
        &self.registry
    }

    /// Subscribes to state snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ConnectionState {
        self.state_tx.borrow().clone()
    }

    /// Returns whether the session is connected for the connector most
    /// recently asked to activate.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state_tx.borrow().is_connected()
    }

    /// Activates the named connector.
    ///
    /// An unknown connector name is a configuration error: it is logged and
    /// the state is left untouched. Otherwise the selection is persisted,
    /// the connector activated, and on an unsupported-chain failure exactly
    /// one network-registration and retry cycle is run before giving up.
    pub async fn login(&self, name: &str) -> ConnectionState {
        let connector = match self.registry.resolve(name) {
            Ok(connector) => connector,
            Err(e) => {
                warn!(connector = name, error = %e, "Unable to find connector");
                return self.snapshot();
            }
        };

        let _gate = self.gate.lock().await;

        let attempt = self.begin_attempt(name);
        debug!(connector = name, attempt, "Activating connector");

        if let Err(e) = self.storage.set(SELECTION_KEY, name).await {
            warn!(error = %e, "Failed to persist connector selection");
        }

        let outcome = self.activate_with_bootstrap(connector.as_ref()).await;
        self.finish_attempt(attempt, name, outcome)
    }

    /// Clears the persisted selection and deactivates the session.
    ///
    /// Idempotent; calling it while already idle is a no-op.
    pub async fn logout(&self) {
        let _gate = self.gate.lock().await;

        if let Err(e) = self.storage.remove(SELECTION_KEY).await {
            warn!(error = %e, "Failed to clear persisted connector selection");
        }

        let current = self.state_tx.borrow().connector.clone();
        if let Some(name) = current {
            if let Ok(connector) = self.registry.resolve(&name) {
                connector.deactivate().await;
            }
        }

        self.state_tx.send_modify(ConnectionState::reset);
        info!("Wallet session deactivated");
    }

    async fn activate_with_bootstrap(
        &self,
        connector: &dyn ConnectorPort,
    ) -> Result<Activation, WalletError> {
        let error = match connector.activate().await.map_err(WalletError::classify) {
            Ok(activation) => return Ok(activation),
            Err(error) => error,
        };
        if !error.is_unsupported_chain() {
            return Err(error);
        }

        debug!(error = %error, "Wallet on unsupported chain, attempting registration");
        if !self.bootstrap.ensure_chain(&self.chain).await {
            return Err(error);
        }

        // The wallet acknowledged the registration; verify it actually
        // switched before burning the single retry.
        match connector.current_chain_id().await {
            Ok(current) if current != self.chain.chain_id => {
                warn!(
                    current,
                    target = self.chain.chain_id,
                    "Chain registration acknowledged but wallet did not switch"
                );
                return Err(WalletError::unsupported_chain(current));
            }
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "Chain re-query failed, retrying activation anyway");
            }
        }

        // Single-shot retry: a second unsupported-chain failure is final and
        // must not trigger another registration cycle.
        connector.activate().await.map_err(WalletError::classify)
    }

    fn begin_attempt(&self, name: &str) -> u64 {
        let mut attempt = 0;
        self.state_tx.send_modify(|state| {
            state.attempt += 1;
            state.phase = ConnectionPhase::Activating;
            state.activating = Some(name.to_string());
            state.error = None;
            attempt = state.attempt;
        });
        attempt
    }

    fn finish_attempt(
        &self,
        attempt: u64,
        name: &str,
        outcome: Result<Activation, WalletError>,
    ) -> ConnectionState {
        self.state_tx.send_modify(|state| {
            if state.attempt != attempt {
                debug!(attempt, "Discarding superseded activation result");
                return;
            }

            match outcome {
                Ok(activation) => {
                    info!(
                        connector = name,
                        account = %activation.account.short(),
                        chain_id = activation.chain_id,
                        "Wallet connected"
                    );
                    state.phase = ConnectionPhase::Connected;
                    state.account = Some(activation.account);
                    state.chain_id = Some(activation.chain_id);
                    state.provider = Some(activation.provider);
                    state.error = None;
                    state.connector = Some(name.to_string());
                }
                Err(error) => {
                    warn!(connector = name, error = %error, "Wallet activation failed");
                    state.phase = ConnectionPhase::Failed;
                    state.account = None;
                    state.chain_id = None;
                    state.provider = None;
                    state.error = Some(error);
                    state.connector = Some(name.to_string());
                }
            }
        });

        self.snapshot()
    }
}
