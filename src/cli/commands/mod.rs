//! Command implementations.
//!
//! Each subcommand lives in its own module; `run` dispatches once the
//! binary has decided a command is present.

pub mod export;
pub mod search;
pub mod shared;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the selected subcommand.
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run_search(args),
        Commands::Export(args) => export::run_export(args),
    }
}
