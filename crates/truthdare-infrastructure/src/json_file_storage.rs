//! File-backed persistence substrate.
//!
//! Stores each collection as one JSON document under the platform data
//! directory: `{data_dir}/truthdare/{key}.json`. Writes create the
//! directory on demand; reads of never-written keys resolve to `None`.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use truthdare_core::error::{GameError, Result};
use truthdare_core::storage::{GameStorage, StorageKey};

use crate::paths::GamePaths;

/// File-per-collection substrate.
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at the platform data directory.
    pub fn new() -> Result<Self> {
        let base_dir = GamePaths::data_dir().map_err(|e| GameError::storage(e.to_string()))?;
        Ok(Self { base_dir })
    }

    /// Creates a storage rooted at a custom directory (for testing).
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn entry_path(&self, key: StorageKey) -> PathBuf {
        self.base_dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl GameStorage for JsonFileStorage {
    async fn get(&self, key: StorageKey) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(GameError::io(format!("Failed to read {key}: {err}"))),
        }
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|err| GameError::io(format!("Failed to create data directory: {err}")))?;
        let path = self.entry_path(key);
        debug!(path = %path.display(), "writing collection");
        fs::write(&path, value)
            .await
            .map_err(|err| GameError::io(format!("Failed to write {key}: {err}")))?;
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<()> {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(GameError::io(format!("Failed to remove {key}: {err}"))),
        }
    }
}
