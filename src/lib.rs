//! Product Sorter Library
//!
//! A Rust library for loading product lists from comma-delimited files and
//! presenting them in sorted and grouped views.
//!
//! This library provides tools for:
//! - Parsing product CSV files with automatic layout detection
//! - Skipping and reporting malformed rows without aborting the read
//! - Stable sorting by price, quantity and name
//! - Grouping by the first word of the product name with prices ordered per group
//! - Discovering product files and rendering fixed-width tables

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod file_discovery;
        pub mod product_csv_parser;
        pub mod product_sorter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Layout, Product};
pub use app::services::product_csv_parser::{InputStatus, ParseResult, ProductCsvParser};
pub use app::services::product_sorter::{ProductGroups, SortKey};
pub use config::Config;

/// Result type alias for the product sorter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for product loading and sorting
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found at {path}")]
    FileNotFound { path: String },

    /// Input has no header or no data rows
    #[error("The CSV file is empty or missing headers ({lines} line(s) found)")]
    MissingHeaderOrData { lines: usize },

    /// Header width selects neither layout
    #[error(
        "Header has {found} field(s), expected 3 or 4; reading rows as name,price,quantity"
    )]
    UnexpectedHeader { found: usize },

    /// Row could not be read as a delimited record
    #[error("Unreadable record on line {line}: {source}")]
    CsvRecord {
        line: usize,
        #[source]
        source: csv::Error,
    },

    /// Row field count does not match the detected layout
    #[error("Skipping invalid line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Name field is blank
    #[error("Missing product name on line {line}")]
    MissingName { line: usize },

    /// Price field is not a non-negative invariant decimal
    #[error("Invalid price on line {line}: '{value}'")]
    InvalidPrice { line: usize, value: String },

    /// Quantity field is not a non-negative integer
    #[error("Invalid quantity on line {line}: '{value}'")]
    InvalidQuantity { line: usize, value: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Product file discovery failed
    #[error("File discovery error: {message}")]
    FileDiscovery { message: String },

    /// Menu selection could not be understood
    #[error("Invalid selection: {message}")]
    InvalidSelection { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a missing header or data error
    pub fn missing_header_or_data(lines: usize) -> Self {
        Self::MissingHeaderOrData { lines }
    }

    /// Create an unexpected header width error
    pub fn unexpected_header(found: usize) -> Self {
        Self::UnexpectedHeader { found }
    }

    /// Create a record read error
    pub fn csv_record(line: usize, source: csv::Error) -> Self {
        Self::CsvRecord { line, source }
    }

    /// Create a malformed row error
    pub fn malformed_row(line: usize, expected: usize, found: usize) -> Self {
        Self::MalformedRow {
            line,
            expected,
            found,
        }
    }

    pub fn missing_name(line: usize) -> Self {
        Self::MissingName { line }
    }

    pub fn invalid_price(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidPrice {
            line,
            value: value.into(),
        }
    }

    pub fn invalid_quantity(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            line,
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file discovery error
    pub fn file_discovery(message: impl Into<String>) -> Self {
        Self::FileDiscovery {
            message: message.into(),
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::FileDiscovery {
            message: format!("invalid file pattern: {}", error),
        }
    }
}
