//! Roster management with player-name validation.
//!
//! The store accepts any name; validation happens here, ahead of
//! insertion, so every caller gets the same rules: names are trimmed,
//! must be non-empty, and must be unique case-insensitively.

use truthdare_core::error::{GameError, Result};
use truthdare_core::player::Player;
use truthdare_core::store::GameDataStore;

/// Validating facade over the store's player collection.
#[derive(Clone)]
pub struct RosterService {
    store: GameDataStore,
}

impl RosterService {
    pub fn new(store: GameDataStore) -> Self {
        Self { store }
    }

    /// Validates and adds a player, returning the created record.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPlayerName`] when the trimmed name is empty
    /// - [`GameError::DuplicatePlayerName`] when a player with the same
    ///   name already exists (case-insensitive)
    pub async fn add_player(&self, name: &str) -> Result<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidPlayerName(
                "name must not be empty".to_string(),
            ));
        }
        let players = self.store.players().await;
        if players.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
            return Err(GameError::DuplicatePlayerName(name.to_string()));
        }
        Ok(self.store.add_player(name).await)
    }

    pub async fn remove_player(&self, player_id: &str) {
        self.store.remove_player(player_id).await;
    }

    pub async fn players(&self) -> Vec<Player> {
        self.store.players().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use truthdare_infrastructure::MemoryStorage;

    use super::*;

    async fn roster() -> RosterService {
        let store = GameDataStore::new(Arc::new(MemoryStorage::new()));
        store.initialize().await;
        RosterService::new(store)
    }

    #[tokio::test]
    async fn test_add_player_trims_name() {
        let roster = roster().await;

        let player = roster.add_player("  Alex  ").await.unwrap();
        assert_eq!(player.name, "Alex");
    }

    #[tokio::test]
    async fn test_add_player_rejects_blank_name() {
        let roster = roster().await;

        let err = roster.add_player("   ").await.unwrap_err();
        assert!(matches!(err, GameError::InvalidPlayerName(_)));
        assert!(roster.players().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_player_rejects_case_insensitive_duplicate() {
        let roster = roster().await;
        roster.add_player("Alex").await.unwrap();

        let err = roster.add_player("alex").await.unwrap_err();
        assert!(matches!(err, GameError::DuplicatePlayerName(_)));
        assert_eq!(roster.players().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_player() {
        let roster = roster().await;
        let player = roster.add_player("Alex").await.unwrap();

        roster.remove_player(&player.id).await;
        assert!(roster.players().await.is_empty());
    }
}
