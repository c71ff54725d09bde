//! Selection storage port definition.

use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Storage key holding the name of the last-used connector.
pub const SELECTION_KEY: &str = "connector";

/// Port for durable key-value persistence of the connector selection.
#[async_trait]
pub trait SelectionStoragePort: Send + Sync {
    /// Retrieves a stored value.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores a value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a stored value. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock selection storage for testing.
    pub struct MockSelectionStorage {
        values: Arc<RwLock<HashMap<String, String>>>,
        fail_writes: bool,
    }

    impl MockSelectionStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                values: Arc::new(RwLock::new(HashMap::new())),
                fail_writes: false,
            }
        }

        /// Creates mock storage seeded with a persisted selection.
        pub fn with_selection(name: &str) -> Self {
            let mut values = HashMap::new();
            values.insert(SELECTION_KEY.to_string(), name.to_string());
            Self {
                values: Arc::new(RwLock::new(values)),
                fail_writes: false,
            }
        }

        /// Creates mock storage whose writes always fail.
        pub fn failing_writes() -> Self {
            Self {
                values: Arc::new(RwLock::new(HashMap::new())),
                fail_writes: true,
            }
        }
    }

    impl Default for MockSelectionStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SelectionStoragePort for MockSelectionStorage {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.values.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::write("mock write failure"));
            }
            self.values
                .write()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::write("mock write failure"));
            }
            self.values.write().await.remove(key);
            Ok(())
        }
    }
}
