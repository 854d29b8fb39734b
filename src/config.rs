//! Configuration management and validation.
//!
//! Provides the settings shared by every command: where product files live,
//! which file names count as product lists, and the field delimiter.

use crate::app::services::product_csv_parser::ProductCsvParser;
use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_DELIMITER, DEFAULT_FILE_PATTERN};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Runtime configuration for the product sorter
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory scanned for product files
    pub data_dir: PathBuf,

    /// Glob pattern product file names must match
    pub file_pattern: String,

    /// Field delimiter inside product files, a single ASCII byte
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl Config {
    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Create configuration with a custom file pattern
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Create configuration with a custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validate the configuration
    ///
    /// The delimiter must not be a character that can appear inside a price
    /// or quantity, and must survive field trimming.
    pub fn validate(&self) -> Result<()> {
        if self.file_pattern.trim().is_empty() {
            return Err(Error::configuration("file pattern must not be empty"));
        }

        glob::Pattern::new(&self.file_pattern).map_err(|e| {
            Error::configuration(format!(
                "invalid file pattern '{}': {}",
                self.file_pattern, e
            ))
        })?;

        let d = self.delimiter;
        if !d.is_ascii() {
            return Err(Error::configuration(format!(
                "delimiter byte 0x{:02x} is not ASCII",
                d
            )));
        }
        if d.is_ascii_digit() || d.is_ascii_whitespace() || matches!(d, b'.' | b'+' | b'-') {
            return Err(Error::configuration(format!(
                "delimiter {:?} conflicts with numeric fields or trimming",
                char::from(d)
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Build a parser using this configuration's delimiter
    pub fn parser(&self) -> ProductCsvParser {
        ProductCsvParser::new(self.delimiter)
    }
}
