//! Command implementations for the looped-list CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Check whether a looped list contains a cycle
//! - walk: Print the elements met while following the list

pub mod inspect;
pub mod walk;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Walk { .. } => walk::execute_walk_command(command),
    }
}
