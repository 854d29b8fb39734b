//! Shared components for CLI commands
//!
//! This module contains logging setup and the product loading step used by
//! both the interactive browser and the one-shot commands.

use crate::app::services::product_csv_parser::{InputStatus, ParseResult};
use crate::cli::args::Args;
use crate::config::Config;
use anyhow::{Result, anyhow};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("product_sorter={}", log_level)));

    if args.verbose == 0 {
        // Skipped-row warnings read best without timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .without_time()
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
    } else {
        // Detailed logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Parse one product file with the configured delimiter
pub fn load_products(config: &Config, path: &Path) -> ParseResult {
    let result = config.parser().read_file(path);

    match result.status {
        InputStatus::Parsed => info!(
            "{}: {} of {} rows usable ({:.1}%)",
            path.display(),
            result.stats.products_parsed,
            result.stats.total_rows,
            result.stats.success_rate()
        ),
        status => debug!("{}: no products loaded ({:?})", path.display(), status),
    }

    result
}
