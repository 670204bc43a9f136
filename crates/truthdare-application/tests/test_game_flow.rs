//! End-to-end flow over an in-memory substrate: roster, rounds, package
//! gating, and durability across engine restarts.

use std::sync::Arc;

use truthdare_application::GameApp;
use truthdare_core::content::ContentKind;
use truthdare_core::store::GameDataStore;
use truthdare_infrastructure::MemoryStorage;

#[tokio::test]
async fn test_full_game_session() {
    let storage = Arc::new(MemoryStorage::new());
    let app = GameApp::with_storage(storage.clone()).await;

    app.roster.add_player("Alex").await.unwrap();
    app.roster.add_player("Bea").await.unwrap();
    assert!(app.roster.add_player("ALEX").await.is_err());

    // A few rounds; rotation alternates and stats accumulate.
    let first = app.round.draw(ContentKind::Truth).await.unwrap();
    let second = app.round.draw(ContentKind::Dare).await.unwrap();
    assert_eq!(first.player.name, "Alex");
    assert_eq!(second.player.name, "Bea");
    assert_eq!(app.round.history().await.len(), 2);

    let players = app.store.players().await;
    assert_eq!(players[0].stats.truths, 1);
    assert_eq!(players[1].stats.dares, 1);

    app.shutdown().await;

    // A fresh engine over the same substrate sees the persisted roster.
    let app = GameApp::with_storage(storage).await;
    let players = app.store.players().await;
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].stats.truths, 1);
    app.shutdown().await;
}

#[tokio::test]
async fn test_password_gate_controls_draws() {
    let app = GameApp::with_storage(Arc::new(MemoryStorage::new())).await;
    app.roster.add_player("Alex").await.unwrap();

    // Narrow the selection to a single gated package.
    let spicy = app.store.add_package("Spicy", "desc", "🌶️", "#900").await;
    app.store
        .add_content(ContentKind::Truth, "Spicy question", 1, Some(spicy.id.clone()))
        .await;
    app.store
        .update_package_password(&spicy.id, Some("secret".to_string()))
        .await;
    let mut settings = app.store.settings().await;
    settings.selected_packages = vec![spicy.id.clone()];
    app.store.save_settings(settings).await;

    // Locked: nothing to draw.
    assert!(app.round.draw(ContentKind::Truth).await.is_none());

    // Wrong password keeps it locked.
    assert!(!app.store.unlock_package(&spicy.id, "guess").await);
    assert!(app.round.draw(ContentKind::Truth).await.is_none());

    // Correct password opens the pool.
    assert!(app.store.unlock_package(&spicy.id, "secret").await);
    let record = app.round.draw(ContentKind::Truth).await.unwrap();
    assert_eq!(record.content.text, "Spicy question");

    app.shutdown().await;
}

#[tokio::test]
async fn test_package_removal_cascades_through_engine() {
    let storage = Arc::new(MemoryStorage::new());
    let app = GameApp::with_storage(storage.clone()).await;

    let beach = app.store.add_package("Beach", "desc", "🏖️", "#111").await;
    app.store
        .add_content(ContentKind::Dare, "Build a sandcastle", 1, Some(beach.id.clone()))
        .await;
    app.store.remove_package(&beach.id).await;
    app.shutdown().await;

    // The cascade survives a reload.
    let store = GameDataStore::new(storage);
    store.initialize().await;
    assert!(!store.packages().await.iter().any(|p| p.id == beach.id));
    assert!(!store.content().await.iter().any(|c| c.package_id == beach.id));
    let settings = store.settings().await;
    assert!(!settings.selected_packages.contains(&beach.id));
    assert!(!settings.selected_packages.is_empty());
}

#[tokio::test]
async fn test_reset_returns_engine_to_first_run_state() {
    let app = GameApp::with_storage(Arc::new(MemoryStorage::new())).await;

    app.roster.add_player("Alex").await.unwrap();
    app.round.draw(ContentKind::Truth).await.unwrap();
    app.store.add_package("Beach", "desc", "🏖️", "#111").await;

    app.store.reset_app_data().await;
    app.round.reset().await;

    assert!(app.store.players().await.is_empty());
    assert_eq!(app.store.packages().await.len(), 3);
    assert!(app.round.history().await.is_empty());
    assert!(app.round.current_player().await.is_none());

    app.shutdown().await;
}
