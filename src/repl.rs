//! REPL Module
//!
//! Reads lines from stdin, cleans them, and dispatches to the command table.
//! Handler errors are printed and the loop keeps going; only `exit` or EOF
//! ends it.

use std::collections::HashMap;
use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands::{CliCommand, ReplFlow, ReplState};

/// Lowercases the input and splits it on whitespace.
///
/// The first word is the command name, the rest are its arguments. Empty or
/// all-whitespace input yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the read/dispatch loop until `exit` or EOF.
pub async fn run(
    state: &mut ReplState,
    commands: &HashMap<&'static str, &'static CliCommand>,
) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed
            println!();
            break;
        };

        let cleaned = clean_input(&line);
        let Some(command_name) = cleaned.first() else {
            continue;
        };

        let Some(cmd) = commands.get(command_name.as_str()) else {
            println!("Unknown command");
            continue;
        };

        debug!(command = %cmd.name, args = cleaned.len() - 1, "dispatching");
        match (cmd.callback)(state, &cleaned[1..]).await {
            Ok(ReplFlow::Continue) => {}
            Ok(ReplFlow::Exit) => break,
            Err(err) => println!("Error executing command {}: {}", command_name, err),
        }
    }

    Ok(())
}
