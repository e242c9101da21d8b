//! Cache Reaper Task
//!
//! Background task that periodically removes entries older than the
//! cache-wide interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background reaper for a cache store.
///
/// The task ticks once per `interval`. On each tick it takes the store's
/// exclusive lock, removes every entry whose age exceeds `interval`, logs
/// one event per removed key, and releases the lock before the next tick.
/// The lock is never held across the timer wait.
///
/// The task exits when `shutdown` is signalled or when every sender side of
/// the channel has been dropped, whichever comes first.
///
/// # Arguments
/// * `store` - Shared store protected by the cache's lock
/// * `interval` - Tick period and expiry threshold
/// * `shutdown` - Watch channel the cache handle signals on close
///
/// # Returns
/// A JoinHandle that resolves once the reaper has exited.
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "cache reaper started");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // A tokio interval fires immediately; swallow that first tick so the
        // first scan happens one full period after construction.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let reaped = {
                        let mut store_guard = store.lock().await;
                        store_guard.reap_expired(interval)
                    };

                    for key in &reaped {
                        info!(%key, "reaped expired entry");
                    }
                    if reaped.is_empty() {
                        debug!("reaper tick: nothing expired");
                    }
                }
                _ = shutdown.changed() => {
                    info!("cache reaper stopping");
                    break;
                }
            }
        }
    })
}
