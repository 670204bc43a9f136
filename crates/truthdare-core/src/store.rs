//! The game data store: sole owner of persisted game state.
//!
//! Every read and write of the four collections goes through
//! [`GameDataStore`]. The store loads collections from the substrate with
//! per-collection self-healing, enforces the cross-collection invariants
//! (immutable default packages, never-empty package selection, cascade on
//! package removal), and applies the 24-hour unlock expiry.
//!
//! Mutations are fire-and-forget with respect to durability: the in-memory
//! copy is updated even when the substrate write fails, and the failure is
//! logged rather than surfaced. The store assumes a single logical writer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::content::{ContentKind, ContentPatch, GameContent};
use crate::package::{ContentPackage, PackagePatch};
use crate::player::Player;
use crate::settings::GameSettings;
use crate::storage::{GameStorage, StorageKey};

/// How long an unlocked password-protected package stays open, in epoch
/// milliseconds.
pub const UNLOCK_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Default)]
struct Collections {
    players: Vec<Player>,
    content: Vec<GameContent>,
    packages: Vec<ContentPackage>,
    settings: GameSettings,
}

/// Injectable store service owning the four persisted collections.
///
/// Cheap to clone; clones share state. Construct one per substrate, call
/// [`initialize`](Self::initialize) once, then issue mutations from a
/// single logical writer.
#[derive(Clone)]
pub struct GameDataStore {
    storage: Arc<dyn GameStorage>,
    state: Arc<RwLock<Collections>>,
    loading: Arc<AtomicBool>,
    data_loaded: Arc<AtomicBool>,
    last_issued_id: Arc<AtomicI64>,
}

impl GameDataStore {
    /// Creates a store over the given substrate. No I/O happens until
    /// [`initialize`](Self::initialize).
    pub fn new(storage: Arc<dyn GameStorage>) -> Self {
        Self {
            storage,
            state: Arc::new(RwLock::new(Collections::default())),
            loading: Arc::new(AtomicBool::new(true)),
            data_loaded: Arc::new(AtomicBool::new(false)),
            last_issued_id: Arc::new(AtomicI64::new(0)),
        }
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// Reads all four collections from the substrate in parallel.
    ///
    /// Each collection heals independently: a missing or malformed document
    /// is replaced with the hard-coded default and persisted back. A
    /// substrate read failure falls back to the default without persisting.
    /// `data_loaded` is set even on total failure so consumers are never
    /// wedged in a loading state.
    pub async fn initialize(&self) {
        self.loading.store(true, Ordering::SeqCst);

        let (players_raw, content_raw, packages_raw, settings_raw) = tokio::join!(
            self.storage.get(StorageKey::Players),
            self.storage.get(StorageKey::Content),
            self.storage.get(StorageKey::Packages),
            self.storage.get(StorageKey::Settings),
        );

        let players: Vec<Player> = self
            .load_collection(StorageKey::Players, players_raw, Vec::new)
            .await;
        let content: Vec<GameContent> = self
            .load_collection(StorageKey::Content, content_raw, catalog::builtin_content)
            .await;
        let packages: Vec<ContentPackage> = self
            .load_collection(StorageKey::Packages, packages_raw, catalog::default_packages)
            .await;
        let settings: GameSettings = self
            .load_collection(StorageKey::Settings, settings_raw, GameSettings::default)
            .await;

        {
            let mut state = self.state.write().await;
            *state = Collections {
                players,
                content,
                packages,
                settings,
            };
        }

        self.data_loaded.store(true, Ordering::SeqCst);
        self.loading.store(false, Ordering::SeqCst);
        info!("game data loaded");
    }

    /// Re-reads the substrate on demand, discarding unsaved in-memory
    /// divergence.
    pub async fn refresh(&self) {
        self.initialize().await;
    }

    async fn load_collection<T>(
        &self,
        key: StorageKey,
        raw: crate::error::Result<Option<String>>,
        default: impl FnOnce() -> T,
    ) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        match raw {
            Ok(Some(text)) => match serde_json::from_str::<T>(&text) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key = %key, %err, "persisted collection is malformed, restoring default");
                    let value = default();
                    self.persist(key, &value).await;
                    value
                }
            },
            Ok(None) => {
                let value = default();
                self.persist(key, &value).await;
                value
            }
            Err(err) => {
                warn!(key = %key, %err, "failed to read collection, falling back to default");
                default()
            }
        }
    }

    // ========================================================================
    // Readiness flags
    // ========================================================================

    /// True until the initial load pass completes. Necessary but not
    /// sufficient as a readiness signal; see [`is_data_loaded`](Self::is_data_loaded).
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// True once a load pass has completed, even on partial failure. The
    /// authoritative signal that collections are populated.
    pub fn is_data_loaded(&self) -> bool {
        self.data_loaded.load(Ordering::SeqCst)
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    pub async fn players(&self) -> Vec<Player> {
        self.state.read().await.players.clone()
    }

    pub async fn content(&self) -> Vec<GameContent> {
        self.state.read().await.content.clone()
    }

    pub async fn packages(&self) -> Vec<ContentPackage> {
        self.state.read().await.packages.clone()
    }

    pub async fn settings(&self) -> GameSettings {
        self.state.read().await.settings.clone()
    }

    /// Prompts matching `kind` and `level` from packages that are selected
    /// (or the default package when the selection is somehow empty) and not
    /// password-locked. Pure filter, no side effects.
    pub async fn content_for_level(&self, kind: ContentKind, level: i32) -> Vec<GameContent> {
        let state = self.state.read().await;
        let active: Vec<&str> = if state.settings.selected_packages.is_empty() {
            vec![catalog::DEFAULT_PACKAGE_ID]
        } else {
            state
                .settings
                .selected_packages
                .iter()
                .map(String::as_str)
                .collect()
        };

        state
            .content
            .iter()
            .filter(|row| row.kind == kind && row.level == level)
            .filter(|row| active.contains(&row.package_id.as_str()))
            .filter(|row| {
                state
                    .packages
                    .iter()
                    .find(|p| p.id == row.package_id)
                    .is_none_or(|p| !p.is_locked())
            })
            .cloned()
            .collect()
    }

    // ========================================================================
    // Player mutations
    // ========================================================================

    /// Appends a player with zeroed stats and returns it.
    pub async fn add_player(&self, name: impl Into<String>) -> Player {
        let player = Player::new(self.issue_id(), name);
        let players = {
            let mut state = self.state.write().await;
            state.players.push(player.clone());
            state.players.clone()
        };
        self.persist(StorageKey::Players, &players).await;
        player
    }

    pub async fn remove_player(&self, player_id: &str) {
        let players = {
            let mut state = self.state.write().await;
            state.players.retain(|p| p.id != player_id);
            state.players.clone()
        };
        self.persist(StorageKey::Players, &players).await;
    }

    /// Increments the drawn-prompt counter for the matching player.
    pub async fn update_player_stats(&self, player_id: &str, kind: ContentKind) {
        let players = {
            let mut state = self.state.write().await;
            if let Some(player) = state.players.iter_mut().find(|p| p.id == player_id) {
                player.stats.record(kind);
            }
            state.players.clone()
        };
        self.persist(StorageKey::Players, &players).await;
    }

    // ========================================================================
    // Content mutations
    // ========================================================================

    /// Appends a prompt; `package_id` falls back to the default package.
    pub async fn add_content(
        &self,
        kind: ContentKind,
        text: impl Into<String>,
        level: i32,
        package_id: Option<String>,
    ) -> GameContent {
        let row = GameContent {
            id: self.issue_id(),
            kind,
            text: text.into(),
            level,
            package_id: package_id.unwrap_or_else(|| catalog::DEFAULT_PACKAGE_ID.to_string()),
        };
        let content = {
            let mut state = self.state.write().await;
            state.content.push(row.clone());
            state.content.clone()
        };
        self.persist(StorageKey::Content, &content).await;
        row
    }

    pub async fn remove_content(&self, content_id: &str) {
        let content = {
            let mut state = self.state.write().await;
            state.content.retain(|c| c.id != content_id);
            state.content.clone()
        };
        self.persist(StorageKey::Content, &content).await;
    }

    pub async fn update_content(&self, content_id: &str, patch: ContentPatch) {
        let content = {
            let mut state = self.state.write().await;
            if let Some(row) = state.content.iter_mut().find(|c| c.id == content_id) {
                row.apply(patch);
            }
            state.content.clone()
        };
        self.persist(StorageKey::Content, &content).await;
    }

    // ========================================================================
    // Package mutations
    // ========================================================================

    /// Appends a user package and auto-selects it in settings.
    pub async fn add_package(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> ContentPackage {
        let package = ContentPackage::new(self.issue_id(), name, description, icon, color);
        let (packages, settings) = {
            let mut state = self.state.write().await;
            state.packages.push(package.clone());
            state.settings.selected_packages.push(package.id.clone());
            (state.packages.clone(), state.settings.clone())
        };
        self.persist(StorageKey::Packages, &packages).await;
        self.persist(StorageKey::Settings, &settings).await;
        package
    }

    /// Merges fields into a user package. No-op for default packages.
    pub async fn update_package(&self, package_id: &str, patch: PackagePatch) {
        let packages = {
            let mut state = self.state.write().await;
            let Some(package) = state.packages.iter_mut().find(|p| p.id == package_id) else {
                return;
            };
            if package.is_default {
                return;
            }
            package.apply(patch);
            state.packages.clone()
        };
        self.persist(StorageKey::Packages, &packages).await;
    }

    /// Removes a user package, cascading to its prompts and repairing the
    /// package selection. No-op for default packages.
    pub async fn remove_package(&self, package_id: &str) {
        let (packages, content, settings) = {
            let mut state = self.state.write().await;
            if state
                .packages
                .iter()
                .any(|p| p.id == package_id && p.is_default)
            {
                return;
            }
            state.packages.retain(|p| p.id != package_id);
            state.content.retain(|c| c.package_id != package_id);

            let settings = if let Some(pos) = state
                .settings
                .selected_packages
                .iter()
                .position(|id| id == package_id)
            {
                let state = &mut *state;
                state.settings.selected_packages.remove(pos);
                repair_selection(&state.packages, &mut state.settings.selected_packages);
                Some(state.settings.clone())
            } else {
                None
            };

            (state.packages.clone(), state.content.clone(), settings)
        };

        self.persist(StorageKey::Packages, &packages).await;
        self.persist(StorageKey::Content, &content).await;
        if let Some(settings) = settings {
            self.persist(StorageKey::Settings, &settings).await;
        }
    }

    /// Sets (`Some`) or clears (`None`) a user package's password. Either
    /// direction re-locks the package. No-op for default packages.
    pub async fn update_package_password(&self, package_id: &str, password: Option<String>) {
        let packages = {
            let mut state = self.state.write().await;
            let Some(package) = state.packages.iter_mut().find(|p| p.id == package_id) else {
                return;
            };
            if package.is_default {
                return;
            }
            package.is_password_protected = password.is_some();
            package.password = password;
            package.relock();
            state.packages.clone()
        };
        self.persist(StorageKey::Packages, &packages).await;
    }

    /// Unlocks a password-protected package. Returns `false` when the
    /// package is missing, not protected, or the password does not match
    /// the stored value exactly; no state changes in that case.
    pub async fn unlock_package(&self, package_id: &str, password: &str) -> bool {
        let now = Utc::now().timestamp_millis();
        let (packages, settings) = {
            let mut state = self.state.write().await;
            let Some(package) = state.packages.iter_mut().find(|p| p.id == package_id) else {
                return false;
            };
            if !package.is_password_protected || package.password.as_deref() != Some(password) {
                return false;
            }
            package.is_unlocked = true;
            package.unlocked_at = Some(now);
            state
                .settings
                .unlocked_packages
                .insert(package_id.to_string(), now);
            (state.packages.clone(), state.settings.clone())
        };
        self.persist(StorageKey::Packages, &packages).await;
        self.persist(StorageKey::Settings, &settings).await;
        true
    }

    /// Reverts a package to locked and drops its unlock timestamp mirror.
    pub async fn lock_package(&self, package_id: &str) {
        let (packages, settings) = {
            let mut state = self.state.write().await;
            if let Some(package) = state.packages.iter_mut().find(|p| p.id == package_id) {
                package.relock();
            }
            state.settings.unlocked_packages.remove(package_id);
            (state.packages.clone(), state.settings.clone())
        };
        self.persist(StorageKey::Packages, &packages).await;
        self.persist(StorageKey::Settings, &settings).await;
    }

    /// Relocks every protected package whose unlock window has elapsed and
    /// prunes expired entries from the settings mirror. Idempotent; safe to
    /// run redundantly.
    pub async fn check_and_lock_expired_packages(&self) {
        let now = Utc::now().timestamp_millis();
        let changed = {
            let mut state = self.state.write().await;
            let mut expired = false;
            for package in state.packages.iter_mut() {
                if package.is_password_protected && package.is_unlocked {
                    if let Some(unlocked_at) = package.unlocked_at {
                        if now - unlocked_at >= UNLOCK_WINDOW_MS {
                            package.relock();
                            expired = true;
                        }
                    }
                }
            }
            if expired {
                state
                    .settings
                    .unlocked_packages
                    .retain(|_, unlocked_at| now - *unlocked_at < UNLOCK_WINDOW_MS);
                Some((state.packages.clone(), state.settings.clone()))
            } else {
                None
            }
        };

        if let Some((packages, settings)) = changed {
            debug!("relocked expired packages");
            self.persist(StorageKey::Packages, &packages).await;
            self.persist(StorageKey::Settings, &settings).await;
        }
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Overwrites the settings record. A save that would empty the package
    /// selection is repaired before it is applied.
    pub async fn save_settings(&self, mut settings: GameSettings) {
        let settings = {
            let mut state = self.state.write().await;
            let state = &mut *state;
            if settings.selected_packages.is_empty() {
                repair_selection(&state.packages, &mut settings.selected_packages);
            }
            state.settings = settings;
            state.settings.clone()
        };
        self.persist(StorageKey::Settings, &settings).await;
    }

    /// Clears all persisted collections and reinitializes to built-in
    /// defaults, stripping any password or lock state from the default
    /// packages.
    pub async fn reset_app_data(&self) {
        for key in StorageKey::ALL {
            if let Err(err) = self.storage.remove(key).await {
                warn!(key = %key, %err, "failed to clear collection");
            }
        }

        let packages: Vec<ContentPackage> = catalog::default_packages()
            .into_iter()
            .map(|mut package| {
                package.clear_protection();
                package
            })
            .collect();
        let content = catalog::builtin_content();
        let settings = GameSettings::default();

        {
            let mut state = self.state.write().await;
            *state = Collections {
                players: Vec::new(),
                content: content.clone(),
                packages: packages.clone(),
                settings: settings.clone(),
            };
        }

        self.persist(StorageKey::Content, &content).await;
        self.persist(StorageKey::Packages, &packages).await;
        self.persist(StorageKey::Settings, &settings).await;
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Epoch-millisecond id with a monotonic guard, so entities created
    /// within the same millisecond still get distinct ids.
    fn issue_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last_issued_id.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self.last_issued_id.compare_exchange(
                prev,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }

    /// Writes a collection to the substrate. Failures are logged and
    /// swallowed; the in-memory copy stays authoritative for the session.
    async fn persist<T: Serialize>(&self, key: StorageKey, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(key = %key, %err, "failed to serialize collection");
                return;
            }
        };
        if let Err(err) = self.storage.set(key, &payload).await {
            warn!(key = %key, %err, "failed to persist collection");
        }
    }
}

/// Refills an emptied package selection: first package that is not
/// password-locked, else the first remaining package, else the default
/// package id.
fn repair_selection(packages: &[ContentPackage], selected: &mut Vec<String>) {
    if !selected.is_empty() {
        return;
    }
    if let Some(package) = packages.iter().find(|p| !p.is_locked()) {
        selected.push(package.id.clone());
    } else if let Some(package) = packages.first() {
        selected.push(package.id.clone());
    } else {
        selected.push(catalog::DEFAULT_PACKAGE_ID.to_string());
    }
}
