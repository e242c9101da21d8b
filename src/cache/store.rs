//! Cache Store Module
//!
//! The plain map underneath [`TimedCache`](crate::cache::TimedCache): a
//! `HashMap` of stamped entries with no locking of its own. All concurrency
//! discipline lives one level up, where the store sits behind a single
//! exclusive lock.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with insertion-time stamps.
///
/// Not thread-safe on its own; always accessed through the exclusive lock
/// owned by `TimedCache` (callers and the reaper alike).
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Insert ==
    /// Stores a key-value pair, re-stamping the insertion time.
    ///
    /// If the key already exists the old entry is replaced wholesale; there
    /// is never a merge of old and new bytes.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The bytes to store
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Retrieves a copy of the value for `key`, if present.
    ///
    /// No expiry check happens here: an entry that has outlived the interval
    /// but has not yet been visited by the reaper is still returned. The
    /// worst-case lifetime of an entry is therefore twice the interval.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap Expired ==
    /// Removes every entry whose age exceeds `interval`.
    ///
    /// Returns the removed keys so the caller can report each one.
    pub fn reap_expired(&mut self, interval: Duration) -> Vec<String> {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(interval))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
        }

        expired_keys
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
