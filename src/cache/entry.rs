//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped with their
//! insertion time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value plus the instant it was inserted.
///
/// Entries are owned exclusively by the store; readers always receive a copy
/// of the value, never a reference into the map.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Insertion timestamp (monotonic clock)
    pub created_at: Instant,
    /// The stored bytes
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The bytes to store
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Age ==
    /// Returns how long ago this entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the cache-wide interval.
    ///
    /// Boundary condition: an entry is expired only when its age is strictly
    /// greater than `interval`. An entry exactly `interval` old is still
    /// alive, so removal happens on the first reaper tick after the TTL has
    /// fully elapsed.
    pub fn is_expired(&self, interval: Duration) -> bool {
        self.age() > interval
    }
}
