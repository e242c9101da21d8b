//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of their owner.
//!
//! # Tasks
//! - Cache reaper: removes entries older than the cache-wide interval

mod reaper;

pub use reaper::spawn_reaper_task;
