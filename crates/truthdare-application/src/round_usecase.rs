//! In-session round flow: prompt drawing and turn rotation.
//!
//! A round holds the rotating player index and the history of drawn
//! prompts. Both are in-memory only; the store persists player stats, the
//! round does not survive a restart.

use std::sync::Arc;

use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

use truthdare_core::content::{ContentKind, GameContent};
use truthdare_core::player::Player;
use truthdare_core::store::GameDataStore;

/// One drawn prompt, attributed to the player who drew it.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub player: Player,
    pub content: GameContent,
    /// Epoch milliseconds of the draw.
    pub drawn_at: i64,
}

#[derive(Default)]
struct RoundState {
    current_player_index: usize,
    history: Vec<TurnRecord>,
}

/// Drives a game round against the store.
#[derive(Clone)]
pub struct RoundUseCase {
    store: GameDataStore,
    state: Arc<RwLock<RoundState>>,
}

impl RoundUseCase {
    pub fn new(store: GameDataStore) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(RoundState::default())),
        }
    }

    /// The player whose turn it is, or `None` when the roster is empty.
    /// The index clamps back to the start when the roster shrank.
    pub async fn current_player(&self) -> Option<Player> {
        let players = self.store.players().await;
        if players.is_empty() {
            return None;
        }
        let mut state = self.state.write().await;
        if state.current_player_index >= players.len() {
            state.current_player_index = 0;
        }
        players.get(state.current_player_index).cloned()
    }

    /// Draws a uniformly random prompt of `kind` at the settings' selected
    /// level for the current player, records the turn, bumps the player's
    /// stat counter, and advances the rotation when auto-advance is on.
    ///
    /// Returns `None` when the roster is empty or no prompt is available
    /// for the selection (nothing is mutated in that case).
    pub async fn draw(&self, kind: ContentKind) -> Option<TurnRecord> {
        let settings = self.store.settings().await;
        let players = self.store.players().await;
        if players.is_empty() {
            return None;
        }

        let pool = self
            .store
            .content_for_level(kind, settings.selected_level)
            .await;
        let content = pool.choose(&mut rand::thread_rng())?.clone();

        let record = {
            let mut state = self.state.write().await;
            if state.current_player_index >= players.len() {
                state.current_player_index = 0;
            }
            let player = players[state.current_player_index].clone();
            if settings.auto_advance_player {
                state.current_player_index = (state.current_player_index + 1) % players.len();
            }
            let record = TurnRecord {
                player,
                content,
                drawn_at: Utc::now().timestamp_millis(),
            };
            state.history.push(record.clone());
            record
        };

        self.store
            .update_player_stats(&record.player.id, kind)
            .await;
        Some(record)
    }

    /// Drawn turns so far, oldest first.
    pub async fn history(&self) -> Vec<TurnRecord> {
        self.state.read().await.history.clone()
    }

    /// Clears the history and rewinds the rotation.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.current_player_index = 0;
        state.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use truthdare_infrastructure::MemoryStorage;

    use super::*;

    async fn round_with_players(names: &[&str]) -> (GameDataStore, RoundUseCase) {
        let store = GameDataStore::new(Arc::new(MemoryStorage::new()));
        store.initialize().await;
        for name in names {
            store.add_player(*name).await;
        }
        (store.clone(), RoundUseCase::new(store))
    }

    #[tokio::test]
    async fn test_draw_returns_none_without_players() {
        let (_, round) = round_with_players(&[]).await;
        assert!(round.draw(ContentKind::Truth).await.is_none());
        assert!(round.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_draw_returns_none_when_no_content_matches() {
        let (store, round) = round_with_players(&["Alex"]).await;

        // Level 9 has no prompts.
        let mut settings = store.settings().await;
        settings.selected_level = 9;
        store.save_settings(settings).await;

        assert!(round.draw(ContentKind::Dare).await.is_none());
        assert_eq!(store.players().await[0].stats.dares, 0);
    }

    #[tokio::test]
    async fn test_draw_records_turn_and_bumps_stats() {
        let (store, round) = round_with_players(&["Alex"]).await;

        let record = round.draw(ContentKind::Truth).await.unwrap();
        assert_eq!(record.player.name, "Alex");
        assert_eq!(record.content.kind, ContentKind::Truth);
        assert_eq!(record.content.level, 1);

        assert_eq!(round.history().await.len(), 1);
        assert_eq!(store.players().await[0].stats.truths, 1);
    }

    #[tokio::test]
    async fn test_draw_rotates_players_when_auto_advance_is_on() {
        let (_, round) = round_with_players(&["Alex", "Bea"]).await;

        let first = round.draw(ContentKind::Truth).await.unwrap();
        let second = round.draw(ContentKind::Truth).await.unwrap();
        let third = round.draw(ContentKind::Truth).await.unwrap();

        assert_eq!(first.player.name, "Alex");
        assert_eq!(second.player.name, "Bea");
        assert_eq!(third.player.name, "Alex");
    }

    #[tokio::test]
    async fn test_draw_keeps_player_when_auto_advance_is_off() {
        let (store, round) = round_with_players(&["Alex", "Bea"]).await;
        let mut settings = store.settings().await;
        settings.auto_advance_player = false;
        store.save_settings(settings).await;

        let first = round.draw(ContentKind::Dare).await.unwrap();
        let second = round.draw(ContentKind::Dare).await.unwrap();

        assert_eq!(first.player.name, "Alex");
        assert_eq!(second.player.name, "Alex");
    }

    #[tokio::test]
    async fn test_current_player_clamps_after_roster_shrinks() {
        let (store, round) = round_with_players(&["Alex", "Bea"]).await;

        // Advance to Bea, then remove her.
        round.draw(ContentKind::Truth).await.unwrap();
        let bea_id = store.players().await[1].id.clone();
        store.remove_player(&bea_id).await;

        let current = round.current_player().await.unwrap();
        assert_eq!(current.name, "Alex");
    }

    #[tokio::test]
    async fn test_reset_clears_history_and_rotation() {
        let (_, round) = round_with_players(&["Alex", "Bea"]).await;
        round.draw(ContentKind::Truth).await.unwrap();

        round.reset().await;

        assert!(round.history().await.is_empty());
        assert_eq!(round.current_player().await.unwrap().name, "Alex");
    }

    #[tokio::test]
    async fn test_draw_only_uses_matching_pool() {
        let (_, round) = round_with_players(&["Alex"]).await;

        for _ in 0..10 {
            let record = round.draw(ContentKind::Dare).await.unwrap();
            assert_eq!(record.content.kind, ContentKind::Dare);
            assert_eq!(record.content.level, 1);
        }
    }
}
