//! Expired Response Sweep
//!
//! Background task that periodically removes stale entries from a TTL cache.
//! Without it, stale entries leave only when something reads them.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, Shared, TtlCache};

/// Spawns a task that calls `purge_expired` on `cache` every `interval`.
///
/// Returns `None` when `interval` is zero: the cache then expires lazily only.
/// Abort the returned handle to stop the task.
///
/// # Example
/// ```ignore
/// let caches = SessionCaches::default();
/// let handle = spawn_sweep_task(caches.responses.clone(), Duration::from_secs(30));
/// // Later, during shutdown:
/// if let Some(handle) = handle { handle.abort(); }
/// ```
pub fn spawn_sweep_task<V, C>(
    cache: Shared<TtlCache<V, C>>,
    interval: Duration,
) -> Option<JoinHandle<()>>
where
    V: Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    if interval.is_zero() {
        info!("Response sweep disabled, expiring lazily on read");
        return None;
    }

    let handle = tokio::spawn(async move {
        info!("Starting response sweep every {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.purge_expired();

            if removed > 0 {
                info!("Response sweep: removed {} expired entries", removed);
            } else {
                debug!("Response sweep: nothing expired");
            }
        }
    });

    Some(handle)
}
