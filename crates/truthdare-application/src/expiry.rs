//! Background relock sweep for password-protected packages.
//!
//! Unlocked packages expire 24 hours after their unlock timestamp. The
//! sweep itself lives on the store and is idempotent; this scheduler only
//! decides when it runs: once immediately after startup, then on a
//! recurring timer. Hourly resolution is sufficient for a 24-hour window.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use truthdare_core::store::GameDataStore;

/// Default period between sweeps.
pub const SWEEP_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Owns the recurring sweep task. Stop it with
/// [`shutdown`](Self::shutdown); dropping the scheduler also cancels the
/// task so it never outlives the store's consumers.
pub struct LockExpiryScheduler {
    handle: Option<JoinHandle<()>>,
    cancel: CancellationToken,
}

impl LockExpiryScheduler {
    /// Starts the sweep loop with the default hourly period. The first
    /// sweep runs immediately.
    pub fn start(store: GameDataStore) -> Self {
        Self::with_period(store, SWEEP_PERIOD)
    }

    /// Starts the sweep loop with a custom period (for testing).
    pub fn with_period(store: GameDataStore, period: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        store.check_and_lock_expired_packages().await;
                    }
                }
            }
            debug!("lock expiry sweep stopped");
        });
        Self {
            handle: Some(handle),
            cancel,
        }
    }

    /// Cancels the sweep and waits for the task to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for LockExpiryScheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
