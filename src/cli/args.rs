//! Command-line argument definitions for the product sorter
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use crate::app::services::product_sorter::SortKey;
use crate::config::Config;
use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_DELIMITER, DEFAULT_FILE_PATTERN};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the product sorter
///
/// Loads product lists from CSV files and shows them sorted by price,
/// quantity or name, or grouped by the first word of the product name.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "product-sorter",
    version,
    about = "Sort and group product lists loaded from CSV files",
    long_about = "Loads product lists from comma-delimited files with either a \
                  name,price,quantity or name,category,price,quantity layout. Invalid rows \
                  are skipped and reported. Products can be sorted by price, quantity or \
                  name, or grouped by the first word of their name with each group sorted \
                  by price. Without a command an interactive browser is started."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory scanned for product files
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PATH",
        global = true,
        default_value = DEFAULT_DATA_DIR,
        help = "Directory containing product list files"
    )]
    pub data_dir: PathBuf,

    /// Glob pattern for product file names
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "GLOB",
        global = true,
        default_value = DEFAULT_FILE_PATTERN,
        help = "File name pattern for product lists"
    )]
    pub file_pattern: String,

    /// Field delimiter used inside product files
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        global = true,
        default_value_t = char::from(DEFAULT_DELIMITER),
        help = "Field delimiter inside product files"
    )]
    pub delimiter: char,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Skipped-row warnings are hidden. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress warnings about skipped rows",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands for the product sorter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Pick a product file and view it interactively (default command)
    Browse,
    /// Print one sorted or grouped view of a product file
    Show(ShowArgs),
    /// List product files found in the data directory
    List,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Product file to load
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// View to print
    #[arg(
        short = 'b',
        long = "by",
        value_enum,
        default_value_t = View::Price,
        help = "How to order the products"
    )]
    pub view: View,
}

/// Views offered over a parsed product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Ascending price
    Price,
    /// Ascending quantity
    Quantity,
    /// Product name, byte-wise
    Name,
    /// Grouped by first word of the name, price ascending within each group
    Group,
}

impl View {
    /// The sort applied by this view, or `None` for the grouped view
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            View::Price => Some(SortKey::Price),
            View::Quantity => Some(SortKey::Quantity),
            View::Name => Some(SortKey::Name),
            View::Group => None,
        }
    }
}

impl Args {
    /// Get the command to run, browsing when none was given
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }

    /// Build and validate the configuration described by these arguments
    pub fn to_config(&self) -> Result<Config> {
        let delimiter = u8::try_from(self.delimiter).map_err(|_| {
            Error::configuration(format!(
                "delimiter {:?} must be a single ASCII character",
                self.delimiter
            ))
        })?;

        let config = Config::default()
            .with_data_dir(self.data_dir.clone())
            .with_file_pattern(self.file_pattern.clone())
            .with_delimiter(delimiter);
        config.validate()?;
        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
