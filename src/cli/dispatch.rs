//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers::{handle_check, handle_rank};
use crate::exit::RankExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<RankExit> {
    match command {
        Commands::Rank(args) => handle_rank(&args),
        Commands::Check {
            graph,
            config,
            json,
            strict,
        } => handle_check(&graph, config.as_deref(), json, strict),
    }
}
