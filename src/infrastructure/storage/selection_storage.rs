//! TOML-file backed selection storage.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::SelectionStoragePort;

const STORE_FILE: &str = "selection.toml";

/// Durable key-value storage in a TOML file under the user config dir.
///
/// A missing or corrupt file reads as empty; if project directories cannot
/// be determined, persistence is disabled and every read yields absent.
pub struct FileSelectionStorage {
    path: Option<PathBuf>,
}

impl FileSelectionStorage {
    /// Creates storage at the default location.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("io", "walletkit", "walletkit") {
            Self {
                path: Some(proj_dirs.config_dir().join(STORE_FILE)),
            }
        } else {
            warn!("Failed to determine project directories. Selection persistence disabled.");
            Self { path: None }
        }
    }

    /// Creates storage at an explicit path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let Some(path) = &self.path else {
            return Ok(BTreeMap::new());
        };

        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| StorageError::read(e.to_string()))?;

        match toml::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                debug!(error = %e, "Selection store is corrupt, treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    async fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::write(e.to_string()))?;
        }

        let content = toml::to_string(values).map_err(|e| StorageError::write(e.to_string()))?;

        fs::write(path, content)
            .await
            .map_err(|e| StorageError::write(e.to_string()))
    }
}

impl Default for FileSelectionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionStoragePort for FileSelectionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.load().await?;
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.save(&values).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SELECTION_KEY;

    fn make_storage(dir: &tempfile::TempDir) -> FileSelectionStorage {
        FileSelectionStorage::with_path(dir.path().join(STORE_FILE))
    }

    #[tokio::test]
    async fn test_get_on_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = make_storage(&dir);

        assert_eq!(storage.get(SELECTION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = make_storage(&dir);

        storage.set(SELECTION_KEY, "injected").await.unwrap();

        assert_eq!(
            storage.get(SELECTION_KEY).await.unwrap(),
            Some("injected".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_clears_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = make_storage(&dir);

        storage.set(SELECTION_KEY, "injected").await.unwrap();
        storage.remove(SELECTION_KEY).await.unwrap();

        assert_eq!(storage.get(SELECTION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = make_storage(&dir);

        storage.remove(SELECTION_KEY).await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        std::fs::write(&path, "not = [valid").unwrap();

        let storage = FileSelectionStorage::with_path(path);

        assert_eq!(storage.get(SELECTION_KEY).await.unwrap(), None);
    }
}
