//! Pokédex - An interactive Pokédex REPL backed by PokéAPI
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the timed cache (spawns its reaper)
//! 4. Build the PokéAPI client and load the location-area index
//! 5. Build the command table and run the REPL
//! 6. Close the cache on exit or Ctrl+C so the reaper stops cleanly

mod cache;
mod client;
mod commands;
mod config;
mod error;
mod models;
mod repl;
mod tasks;

use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache::TimedCache;
use client::PokeApiClient;
use commands::{command_table, ReplState};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" so log lines don't interleave with the prompt;
    // override with RUST_LOG (e.g. RUST_LOG=pokedex=debug) to see cache hits
    // and reap events.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        cache_interval_secs = config.cache_interval_secs,
        api_base_url = %config.api_base_url,
        "configuration loaded"
    );

    let cache = TimedCache::new(Duration::from_secs(config.cache_interval_secs));
    let client =
        PokeApiClient::new(&config, cache.clone()).context("failed to build PokéAPI client")?;

    let mut state = ReplState::new(client);
    match state.client.load_all_areas().await {
        Ok(areas) => state.areas = areas,
        Err(err) => {
            error!(%err, "failed to load areas");
            println!("Failed to load areas: {}", err);
            cache.close().await;
            return Ok(());
        }
    }

    let commands = command_table();

    tokio::select! {
        result = repl::run(&mut state, &commands) => {
            result.context("REPL I/O failure")?;
        }
        _ = signal::ctrl_c() => {
            println!();
            info!("received Ctrl+C, shutting down");
        }
    }

    // Stop the reaper and release its timer before exiting.
    cache.close().await;
    info!("shutdown complete");
    Ok(())
}
