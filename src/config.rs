//! Configuration Module
//!
//! Handles loading configuration from environment variables.

use std::env;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL and reaper period, in seconds
    pub cache_interval_secs: u64,
    /// Base URL of the PokéAPI REST endpoint
    pub api_base_url: String,
    /// Per-request timeout for PokéAPI calls, in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_SECS` - Cache TTL in seconds (default: 5)
    /// - `POKEAPI_BASE_URL` - API base URL (default: `https://pokeapi.co/api/v2`)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            cache_interval_secs: env::var("CACHE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            api_base_url: env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_secs: 5,
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            http_timeout_secs: 30,
        }
    }
}
