//! Command implementations for the product sorter CLI
//!
//! This module contains the command dispatch and the shared logging setup.
//! Each command is implemented in its own module.

pub mod display;
pub mod interactive;
pub mod list;
pub mod shared;
pub mod show;

pub use shared::setup_logging;

use crate::cli::args::{Args, Commands};
use anyhow::{Context, Result};
use std::io;

/// Main command runner for the product sorter
///
/// This function dispatches to the appropriate subcommand handler:
/// - `browse`: Interactive file and view menus (default)
/// - `show`: One view of one file printed to stdout
/// - `list`: Product files found in the data directory
pub fn run(args: Args) -> Result<()> {
    let config = args.to_config().context("Invalid configuration")?;
    let stdout = io::stdout();

    match args.get_command() {
        Commands::Browse => {
            let stdin = io::stdin();
            interactive::Browser::new(&config, stdin.lock(), stdout.lock()).run()
        }
        Commands::Show(show_args) => show::run_show(&config, &show_args, &mut stdout.lock()),
        Commands::List => list::run_list(&config, &mut stdout.lock()),
    }
}
