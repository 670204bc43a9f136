//! In-memory persistence substrate.
//!
//! Satisfies the same contract as the file-backed substrate without
//! touching disk. Used by tests and previews to construct isolated store
//! instances.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use truthdare_core::error::Result;
use truthdare_core::storage::{GameStorage, StorageKey};

/// HashMap-backed substrate.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document exists under the key.
    pub async fn contains(&self, key: StorageKey) -> bool {
        self.entries.read().await.contains_key(&key)
    }
}

#[async_trait]
impl GameStorage for MemoryStorage {
    async fn get(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        self.entries.write().await.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<()> {
        self.entries.write().await.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let storage = MemoryStorage::new();

        assert!(storage.get(StorageKey::Players).await.unwrap().is_none());

        storage.set(StorageKey::Players, "[]").await.unwrap();
        assert_eq!(
            storage.get(StorageKey::Players).await.unwrap().as_deref(),
            Some("[]")
        );
        assert!(storage.contains(StorageKey::Players).await);

        storage.remove(StorageKey::Players).await.unwrap();
        assert!(!storage.contains(StorageKey::Players).await);
    }
}
