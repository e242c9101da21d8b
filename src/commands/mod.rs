//! Command Dispatch Module
//!
//! The static command table: an ordinary mapping from command name to a
//! handler plus description, built once at startup and passed by reference
//! into the REPL loop. No process-wide singleton.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use rand::Rng;
use tracing::debug;

use crate::client::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;

// == REPL State ==
/// Mutable session state threaded through every command handler.
#[derive(Debug)]
pub struct ReplState {
    /// Cache-backed PokéAPI client
    pub client: PokeApiClient,
    /// Forward pagination cursor for `map`
    pub next: Option<String>,
    /// Backward pagination cursor for `mapb`
    pub previous: Option<String>,
    /// Area name to canonical URL, loaded at startup
    pub areas: HashMap<String, String>,
    /// Pokémon caught this session, by name
    pub caught: HashMap<String, Pokemon>,
}

impl ReplState {
    /// Creates a fresh session around a client.
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            areas: HashMap::new(),
            caught: HashMap::new(),
        }
    }
}

// == Control Flow ==
/// What the REPL loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplFlow {
    /// Keep reading input
    Continue,
    /// Leave the loop so the caller can shut down cleanly
    Exit,
}

// == Command Table ==
type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<ReplFlow>> + 'a>>;

/// A command handler; a plain fn pointer so the table can live in a const.
pub type Callback = for<'a> fn(&'a mut ReplState, &'a [String]) -> CommandFuture<'a>;

/// One entry in the dispatch table.
pub struct CliCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub callback: Callback,
}

/// Every command the REPL understands, in help-listing order.
pub const COMMANDS: &[CliCommand] = &[
    CliCommand {
        name: "help",
        description: "Displays a help message",
        callback: help_cb,
    },
    CliCommand {
        name: "exit",
        description: "Exit the Pokedex",
        callback: exit_cb,
    },
    CliCommand {
        name: "map",
        description: "Displays the names of the next 20 location areas in the Pokemon world",
        callback: map_cb,
    },
    CliCommand {
        name: "mapb",
        description: "Displays the names of the previous 20 location areas in the Pokemon world",
        callback: mapb_cb,
    },
    CliCommand {
        name: "explore",
        description: "Displays all pokemons in the location area",
        callback: explore_cb,
    },
    CliCommand {
        name: "catch",
        description: "Attempt to catch a Pokemon",
        callback: catch_cb,
    },
    CliCommand {
        name: "inspect",
        description: "It takes the name of a Pokemon and prints the name, height, weight, stats and type(s) of the Pokemon",
        callback: inspect_cb,
    },
    CliCommand {
        name: "pokedex",
        description: "It prints a list of all the names of the Pokemon you have caught so far",
        callback: pokedex_cb,
    },
];

/// Builds the name-to-command lookup over [`COMMANDS`].
pub fn command_table() -> HashMap<&'static str, &'static CliCommand> {
    COMMANDS.iter().map(|cmd| (cmd.name, cmd)).collect()
}

// Boxing shims: coerce each async handler into the `Callback` fn-pointer type.
fn help_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_help(state, args))
}
fn exit_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_exit(state, args))
}
fn map_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_map(state, args))
}
fn mapb_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_mapb(state, args))
}
fn explore_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_explore(state, args))
}
fn catch_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_catch(state, args))
}
fn inspect_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_inspect(state, args))
}
fn pokedex_cb<'a>(state: &'a mut ReplState, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(command_pokedex(state, args))
}

// == Handlers ==

async fn command_help(_state: &mut ReplState, _args: &[String]) -> Result<ReplFlow> {
    println!("Welcome to the Pokedex!");
    println!("Usage: ");
    for cmd in COMMANDS {
        println!("{}: {}", cmd.name, cmd.description);
    }
    Ok(ReplFlow::Continue)
}

async fn command_exit(_state: &mut ReplState, _args: &[String]) -> Result<ReplFlow> {
    println!("Closing the Pokedex... Goodbye!");
    Ok(ReplFlow::Exit)
}

async fn command_map(state: &mut ReplState, _args: &[String]) -> Result<ReplFlow> {
    let url = state
        .next
        .clone()
        .unwrap_or_else(|| state.client.location_areas_url());
    show_areas(state, &url, false).await?;
    Ok(ReplFlow::Continue)
}

async fn command_mapb(state: &mut ReplState, _args: &[String]) -> Result<ReplFlow> {
    let url = state.previous.clone().ok_or(PokedexError::NoPreviousPage)?;
    show_areas(state, &url, true).await?;
    Ok(ReplFlow::Continue)
}

/// Prints one page of area names and advances the pagination cursors.
async fn show_areas(state: &mut ReplState, url: &str, reverse: bool) -> Result<()> {
    let page = state.client.location_area_page(url).await?;

    if reverse {
        for area in page.results.iter().rev() {
            println!("{}", area.name);
        }
    } else {
        for area in &page.results {
            println!("{}", area.name);
        }
    }

    state.next = page.next;
    state.previous = page.previous;
    Ok(())
}

async fn command_explore(state: &mut ReplState, args: &[String]) -> Result<ReplFlow> {
    let area_name = args
        .first()
        .ok_or(PokedexError::MissingArgument("area name. Usage: explore <area-name>"))?;
    let url = state
        .areas
        .get(area_name)
        .ok_or_else(|| PokedexError::UnknownArea(area_name.clone()))?
        .clone();

    println!("Exploring {}...", area_name);
    let area = state.client.area_encounters(&url).await?;

    if area.pokemon_encounters.is_empty() {
        println!("No Pokémon found in this area.");
        return Ok(ReplFlow::Continue);
    }

    println!("Found Pokemon:");
    for encounter in &area.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }
    Ok(ReplFlow::Continue)
}

async fn command_catch(state: &mut ReplState, args: &[String]) -> Result<ReplFlow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("Pokémon name. Usage: catch <pokemon-name>"))?;

    println!("Throwing a Pokeball at {}...", name);
    let pokemon = state.client.pokemon(name).await?;

    let rate = catch_rate(pokemon.base_experience);
    let roll = rand::thread_rng().gen_range(0..100);
    debug!(name = %pokemon.name, rate, roll, "catch attempt");

    if roll < rate {
        println!("{} was caught!", pokemon.name);
        println!("You may now inspect it with the inspect command.");
        state.caught.insert(pokemon.name.clone(), pokemon);
    } else {
        println!("{} escaped!", pokemon.name);
    }
    Ok(ReplFlow::Continue)
}

async fn command_inspect(state: &mut ReplState, args: &[String]) -> Result<ReplFlow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("Pokémon name. Usage: inspect <pokemon-name>"))?
        .to_lowercase();

    let pokemon = state
        .caught
        .get(&name)
        .ok_or_else(|| PokedexError::NotCaught(name.clone()))?;

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);

    println!("Stats:");
    for stat in &pokemon.stats {
        println!(" -{}: {}", stat.stat.name, stat.base_stat);
    }

    println!("Types:");
    for slot in &pokemon.types {
        println!(" - {}", slot.kind.name);
    }

    Ok(ReplFlow::Continue)
}

async fn command_pokedex(state: &mut ReplState, _args: &[String]) -> Result<ReplFlow> {
    if state.caught.is_empty() {
        println!("You haven't caught any Pokémon yet.");
        return Ok(ReplFlow::Continue);
    }

    println!("Your pokedex:");
    for name in state.caught.keys() {
        println!(" - {}", name);
    }
    Ok(ReplFlow::Continue)
}

// == Catch Arithmetic ==
/// Catch probability in percent, derived from base experience.
///
/// Integer division on purpose; the result is clamped to [5, 90] so no
/// Pokémon is ever a guaranteed catch or a guaranteed escape.
fn catch_rate(base_experience: i32) -> i32 {
    (100 - base_experience / 3).clamp(5, 90)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TimedCache;
    use crate::config::Config;
    use std::time::Duration;

    fn test_state() -> ReplState {
        let config = Config {
            cache_interval_secs: 300,
            api_base_url: "http://127.0.0.1:9".to_string(),
            http_timeout_secs: 1,
        };
        let cache = TimedCache::new(Duration::from_secs(300));
        ReplState::new(PokeApiClient::new(&config, cache).unwrap())
    }

    fn caught_pokemon(name: &str) -> Pokemon {
        serde_json::from_str(&format!(r#"{{"name": "{}"}}"#, name)).unwrap()
    }

    #[test]
    fn test_catch_rate_clamps() {
        assert_eq!(catch_rate(0), 90);
        assert_eq!(catch_rate(36), 88);
        assert_eq!(catch_rate(150), 50);
        assert_eq!(catch_rate(300), 5);
        assert_eq!(catch_rate(1000), 5);
    }

    #[test]
    fn test_command_table_has_all_commands() {
        let table = command_table();
        assert_eq!(table.len(), COMMANDS.len());
        for name in ["help", "exit", "map", "mapb", "explore", "catch", "inspect", "pokedex"] {
            assert!(table.contains_key(name), "missing command {name}");
        }
    }

    #[tokio::test]
    async fn test_exit_signals_loop_end() {
        let mut state = test_state();
        let flow = command_exit(&mut state, &[]).await.unwrap();
        assert_eq!(flow, ReplFlow::Exit);
    }

    #[tokio::test]
    async fn test_help_continues() {
        let mut state = test_state();
        let flow = command_help(&mut state, &[]).await.unwrap();
        assert_eq!(flow, ReplFlow::Continue);
    }

    #[tokio::test]
    async fn test_mapb_without_previous_page() {
        let mut state = test_state();
        let result = command_mapb(&mut state, &[]).await;
        assert!(matches!(result, Err(PokedexError::NoPreviousPage)));
    }

    #[tokio::test]
    async fn test_explore_requires_argument() {
        let mut state = test_state();
        let result = command_explore(&mut state, &[]).await;
        assert!(matches!(result, Err(PokedexError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_explore_unknown_area() {
        let mut state = test_state();
        let args = vec!["nowhere".to_string()];
        let result = command_explore(&mut state, &args).await;
        assert!(matches!(result, Err(PokedexError::UnknownArea(_))));
    }

    #[tokio::test]
    async fn test_catch_requires_argument() {
        let mut state = test_state();
        let result = command_catch(&mut state, &[]).await;
        assert!(matches!(result, Err(PokedexError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_inspect_uncaught_pokemon() {
        let mut state = test_state();
        let args = vec!["pidgey".to_string()];
        let result = command_inspect(&mut state, &args).await;
        assert!(matches!(result, Err(PokedexError::NotCaught(_))));
    }

    #[tokio::test]
    async fn test_inspect_caught_pokemon() {
        let mut state = test_state();
        state.caught.insert("pidgey".to_string(), caught_pokemon("pidgey"));

        // Lookup is case-insensitive, like the original.
        let args = vec!["Pidgey".to_string()];
        let flow = command_inspect(&mut state, &args).await.unwrap();
        assert_eq!(flow, ReplFlow::Continue);
    }

    #[tokio::test]
    async fn test_pokedex_lists_caught() {
        let mut state = test_state();
        state.caught.insert("ditto".to_string(), caught_pokemon("ditto"));

        let flow = command_pokedex(&mut state, &[]).await.unwrap();
        assert_eq!(flow, ReplFlow::Continue);
    }
}
