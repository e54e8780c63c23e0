//! Janitor Task
//!
//! Background task that periodically sweeps expired entries out of a cache.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::Cache;

/// Smallest sweep period accepted; tokio intervals reject a zero period.
pub const MIN_JANITOR_INTERVAL: Duration = Duration::from_millis(1);

/// Largest sweep period accepted; keeps the first deadline representable.
pub const MAX_JANITOR_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Spawns a background task that sweeps expired entries from `cache` every
/// `interval` until `stop` is cancelled.
///
/// The first sweep happens one full interval after the call. The task holds
/// the cache's exclusive lock only while sweeping, never across an await.
/// Each call starts an independent task; nothing deduplicates janitors on
/// the same cache.
///
/// # Arguments
/// * `cache` - Handle to the cache to sweep
/// * `interval` - Period between sweeps
/// * `stop` - Token whose cancellation ends the task
///
/// # Returns
/// A JoinHandle that completes once the task has observed `stop`. Dropping
/// it detaches the task.
///
/// # Panics
/// Panics if called outside a tokio runtime.
///
/// # Example
/// ```ignore
/// let cache = Cache::new();
/// let stop = CancellationToken::new();
/// let janitor = spawn_janitor(cache.clone(), Duration::from_secs(2), stop.clone());
/// // Later, during shutdown:
/// stop.cancel();
/// janitor.await?;
/// ```
pub fn spawn_janitor(cache: Cache, interval: Duration, stop: CancellationToken) -> JoinHandle<()> {
    let period = interval.clamp(MIN_JANITOR_INTERVAL, MAX_JANITOR_INTERVAL);
    if period != interval {
        warn!(
            "Janitor interval {:?} is out of range, using {:?}",
            interval, period
        );
    }

    tokio::spawn(async move {
        info!("Starting janitor with interval of {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = stop.cancelled() => break,
                _ = ticker.tick() => {
                    let removed = cache.cleanup();

                    if removed > 0 {
                        info!("Janitor sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Janitor sweep: no expired entries found");
                    }
                }
            }
        }

        info!("Janitor stopped");
    })
}

impl Cache {
    /// Starts a janitor for this cache. See [`spawn_janitor`].
    pub fn start_janitor(&self, interval: Duration, stop: CancellationToken) -> JoinHandle<()> {
        spawn_janitor(self.clone(), interval, stop)
    }
}
