//! Silent reconnection at startup.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::WalletSession;
use crate::domain::connection::ConnectionState;
use crate::domain::ports::{SELECTION_KEY, SelectionStoragePort};

/// Replays the last successful login at startup, without a user gesture.
///
/// The attempt is entirely silent: an absent selection, an unreadable
/// store, or a selection naming a connector that is no longer registered
/// all leave the session idle without surfacing an error. The user never
/// asked for this attempt.
pub struct ReconnectUseCase {
    storage: Arc<dyn SelectionStoragePort>,
    session: Arc<WalletSession>,
}

impl ReconnectUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(storage: Arc<dyn SelectionStoragePort>, session: Arc<WalletSession>) -> Self {
        Self { storage, session }
    }

    /// Attempts the silent reconnection and returns the resulting state.
    pub async fn execute(&self) -> ConnectionState {
        let name = match self.storage.get(SELECTION_KEY).await {
            Ok(Some(name)) => name,
            Ok(None) => {
                debug!("No persisted connector selection");
                return self.session.snapshot();
            }
            Err(e) => {
                debug!(error = %e, "Failed to read persisted connector selection");
                return self.session.snapshot();
            }
        };

        if !self.session.registry().contains(&name) {
            debug!(connector = %name, "Persisted connector is no longer registered");
            return self.session.snapshot();
        }

        info!(connector = %name, "Replaying persisted wallet connection");
        self.session.login(&name).await
    }
}
