//! Cache Module
//!
//! Provides an in-memory byte cache with a single cache-wide TTL and a
//! background reaper. Used by the PokéAPI client to avoid re-fetching the
//! same URL within the TTL window.

mod entry;
mod store;
mod timed;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use timed::TimedCache;
