//! PokéAPI Client Module
//!
//! The data-fetch layer: HTTP calls to PokéAPI with responses cached by URL.

mod pokeapi;

pub use pokeapi::PokeApiClient;
