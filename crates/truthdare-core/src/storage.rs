//! Persistence substrate contract.
//!
//! The store talks to an asynchronous key-value substrate keyed by four
//! fixed strings, one per collection. Values are JSON-serialized
//! collections. File-based, browser, or embedded KV backends all satisfy
//! this contract.

use async_trait::async_trait;
use strum_macros::Display;

use crate::error::Result;

/// Fixed keys, one per persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StorageKey {
    #[strum(serialize = "truth_or_dare_players")]
    Players,
    #[strum(serialize = "truth_or_dare_content")]
    Content,
    #[strum(serialize = "truth_or_dare_packages")]
    Packages,
    #[strum(serialize = "truth_or_dare_settings")]
    Settings,
}

impl StorageKey {
    /// All collection keys, in load order.
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Players,
        StorageKey::Content,
        StorageKey::Packages,
        StorageKey::Settings,
    ];

    /// The key string used by the substrate.
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Players => "truth_or_dare_players",
            StorageKey::Content => "truth_or_dare_content",
            StorageKey::Packages => "truth_or_dare_packages",
            StorageKey::Settings => "truth_or_dare_settings",
        }
    }
}

/// Asynchronous key-value persistence substrate.
#[async_trait]
pub trait GameStorage: Send + Sync {
    /// Returns the stored document, or `None` when the key was never
    /// written.
    async fn get(&self, key: StorageKey) -> Result<Option<String>>;

    /// Stores a document under the key, replacing any previous value.
    async fn set(&self, key: StorageKey, value: &str) -> Result<()>;

    /// Deletes the document under the key. Removing an absent key is not an
    /// error.
    async fn remove(&self, key: StorageKey) -> Result<()>;
}
