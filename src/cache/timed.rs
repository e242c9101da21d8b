//! Timed Cache Module
//!
//! The public cache handle: a coarse-locked byte store with a background
//! reaper that removes entries older than the cache-wide interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper_task;

// == Timed Cache ==
/// A concurrent key/value byte cache with interval-based expiration.
///
/// Every entry is stamped at insertion; a background reaper wakes once per
/// `interval` and deletes entries whose age exceeds it. All operations go
/// through one exclusive lock, so a get racing an add or the reaper observes
/// either the old state or the new one, never a torn value.
///
/// The handle is cheap to clone; all clones share the same store and reaper.
/// [`close`](TimedCache::close) stops the reaper deterministically, and the
/// reaper also exits on its own once every handle has been dropped.
#[derive(Debug, Clone)]
pub struct TimedCache {
    /// Shared store; the only lock in the cache
    store: Arc<Mutex<CacheStore>>,
    /// Cache-wide TTL and reaper period
    interval: Duration,
    /// Shutdown signal for the reaper task
    shutdown: Arc<watch::Sender<()>>,
    /// Reaper handle, taken by `close`
    reaper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates a cache and immediately spawns its reaper task.
    ///
    /// Returns without waiting for any reaper tick. Must be called from
    /// within a tokio runtime.
    ///
    /// # Arguments
    /// * `interval` - Cache-wide TTL, also the reaper period
    ///
    /// # Panics
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(interval > Duration::ZERO, "cache interval must be positive");

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(());
        let handle = spawn_reaper_task(Arc::clone(&store), interval, shutdown_rx);

        Self {
            store,
            interval,
            shutdown: Arc::new(shutdown_tx),
            reaper: Arc::new(Mutex::new(Some(handle))),
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, stamping it with the
    /// current time.
    ///
    /// Overwrites replace the whole entry and reset its clock; last write
    /// wins. Infallible.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.lock().await.insert(key.into(), value);
    }

    // == Get ==
    /// Returns a copy of the value for `key`, or `None` if the key was never
    /// added or has been reaped.
    ///
    /// A miss is not an error; it means the caller should fetch from origin.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if the cache currently holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Interval ==
    /// The cache-wide TTL this cache was constructed with.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Close ==
    /// Signals the reaper to stop and waits for it to exit.
    ///
    /// The reaper wakes on the signal (it does not wait out its current
    /// tick) and exits cleanly, releasing its timer. Entries already in the
    /// store stay readable; only expiration stops. Idempotent: later calls,
    /// including from other clones, are no-ops.
    pub async fn close(&self) {
        let _ = self.shutdown.send(());
        if let Some(handle) = self.reaper.lock().await.take() {
            let _ = handle.await;
        }
    }
}
