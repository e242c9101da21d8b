//! Error types for the Pokédex
//!
//! Provides unified error handling using thiserror. Cache misses are not
//! errors anywhere in this crate; they signal "go fetch from origin".

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokédex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP transport failure while talking to PokéAPI
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// PokéAPI answered with a non-success status
    #[error("bad status code: {status}\nBody: {body}")]
    BadStatus { status: u16, body: String },

    /// Response body did not parse as the expected JSON shape
    #[error("failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// No Pokémon with that name exists upstream
    #[error("pokemon {0:?} not found")]
    PokemonNotFound(String),

    /// Area name not present in the loaded area index
    #[error("area {0:?} not found in current map list. Use the 'map' command to list available areas")]
    UnknownArea(String),

    /// Inspect on a Pokémon that was never caught
    #[error("you have not caught that pokemon")]
    NotCaught(String),

    /// mapb before any forward page was shown
    #[error("no previous page available")]
    NoPreviousPage,

    /// Command invoked without its required argument
    #[error("missing {0}")]
    MissingArgument(&'static str),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokédex.
pub type Result<T> = std::result::Result<T, PokedexError>;
