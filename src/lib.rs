//! Pokédex - An interactive Pokédex REPL backed by PokéAPI
//!
//! Fetched API responses are kept in a timed in-memory cache so repeated
//! commands within the TTL window never re-hit the network.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::TimedCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
