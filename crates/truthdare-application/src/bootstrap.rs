//! Engine wiring.
//!
//! Assembles the store, the use cases, and the expiry scheduler into one
//! handle with an explicit startup/teardown lifecycle.

use std::sync::Arc;

use truthdare_core::error::Result;
use truthdare_core::storage::GameStorage;
use truthdare_core::store::GameDataStore;
use truthdare_infrastructure::JsonFileStorage;

use crate::expiry::LockExpiryScheduler;
use crate::roster_service::RosterService;
use crate::round_usecase::RoundUseCase;

/// A fully wired game engine: initialized store, use cases, and the
/// running expiry sweep.
pub struct GameApp {
    pub store: GameDataStore,
    pub roster: RosterService,
    pub round: RoundUseCase,
    scheduler: LockExpiryScheduler,
}

impl GameApp {
    /// Starts the engine over on-disk storage at the platform data
    /// directory.
    pub async fn start() -> Result<Self> {
        let storage = Arc::new(JsonFileStorage::new()?);
        Ok(Self::with_storage(storage).await)
    }

    /// Starts the engine over a caller-provided substrate.
    pub async fn with_storage(storage: Arc<dyn GameStorage>) -> Self {
        let store = GameDataStore::new(storage);
        store.initialize().await;
        let scheduler = LockExpiryScheduler::start(store.clone());
        Self {
            roster: RosterService::new(store.clone()),
            round: RoundUseCase::new(store.clone()),
            store,
            scheduler,
        }
    }

    /// Stops background work. The store itself needs no teardown.
    pub async fn shutdown(self) {
        self.scheduler.shutdown().await;
    }
}
