//! Connector registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::WalletError;
use crate::domain::ports::ConnectorPort;

/// Fixed mapping from connector name to its capability object.
///
/// Built once at process start by the entry point and shared read-only;
/// lookups have no side effects.
#[derive(Default)]
pub struct ConnectorRegistry {
    connectors: HashMap<String, Arc<dyn ConnectorPort>>,
}

impl ConnectorRegistry {
    /// Creates empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connector under its own name.
    #[must_use]
    pub fn register(mut self, connector: Arc<dyn ConnectorPort>) -> Self {
        self.connectors
            .insert(connector.name().to_string(), connector);
        self
    }

    /// Resolves a connector by name.
    ///
    /// # Errors
    /// Returns [`WalletError::UnknownConnector`] if no connector is
    /// registered under the name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ConnectorPort>, WalletError> {
        self.connectors
            .get(name)
            .cloned()
            .ok_or_else(|| WalletError::unknown_connector(name))
    }

    /// Returns whether a connector is registered under the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.connectors.contains_key(name)
    }
}
