//! Core product list parser implementation
//!
//! This module provides the main parser orchestration, handling file reading,
//! layout detection and the row loop that skips invalid rows.

use csv::StringRecord;
use std::path::Path;
use tracing::{debug, info, warn};

use super::record_parser::parse_product_record;
use super::stats::{InputStatus, ParseResult, ParseStats};
use crate::app::models::Layout;
use crate::constants::{BYTE_ORDER_MARK, DEFAULT_DELIMITER, HEADER_LINE, MIN_INPUT_LINES};
use crate::{Error, Result};

/// Parser for delimited product list files
///
/// Parsing never fails as a whole:
/// - A missing or unreadable file yields an empty result
/// - A file without a header and at least one data row yields an empty result
/// - Each invalid data row is skipped and reported, later rows still parse
#[derive(Debug, Clone, Copy)]
pub struct ProductCsvParser {
    delimiter: u8,
}

impl Default for ProductCsvParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl ProductCsvParser {
    /// Create a new parser splitting fields on the ASCII byte `delimiter`
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Read and parse a product list file
    pub fn read_file(&self, file_path: &Path) -> ParseResult {
        info!("Parsing product file: {}", file_path.display());

        let content = match load_content(file_path) {
            Ok(content) => content,
            Err(e) => {
                warn!("{}", e);
                return ParseResult::terminated(InputStatus::MissingInput, e.to_string());
            }
        };

        self.parse_str(&content)
    }

    /// Parse product list text that has already been loaded
    pub fn parse_str(&self, content: &str) -> ParseResult {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
        let line_count = content.lines().count();

        if line_count < MIN_INPUT_LINES {
            let e = Error::missing_header_or_data(line_count);
            warn!("{}", e);
            return ParseResult::terminated(InputStatus::MissingHeaderOrData, e.to_string());
        }

        let mut stats = ParseStats::new();
        let mut products = Vec::with_capacity(line_count - HEADER_LINE);

        let header_width = content
            .lines()
            .next()
            .and_then(|header| self.read_record(header, HEADER_LINE).ok())
            .map_or(0, |record| record.len());
        let layout = Layout::from_field_count(header_width).unwrap_or_else(|| {
            let e = Error::unexpected_header(header_width);
            warn!("{}", e);
            stats.diagnostics.push(e.to_string());
            Layout::default()
        });
        debug!("Detected layout: {} ({} header fields)", layout, header_width);

        for (index, row) in content.lines().enumerate().skip(HEADER_LINE) {
            let line = index + 1;
            stats.total_rows += 1;

            let outcome = self
                .read_record(row, line)
                .and_then(|record| parse_product_record(&record, line, layout));

            match outcome {
                Ok(product) => {
                    products.push(product);
                    stats.products_parsed += 1;
                }
                Err(e) => {
                    warn!("{}", e);
                    stats.rows_skipped += 1;
                    stats.diagnostics.push(e.to_string());
                }
            }
        }

        info!(
            "Parsed {} products from {} rows ({} skipped)",
            stats.products_parsed, stats.total_rows, stats.rows_skipped
        );

        ParseResult {
            products,
            layout,
            status: InputStatus::Parsed,
            stats,
        }
    }

    /// Read one line as a delimited record
    ///
    /// Quotes are literal and the line is split on the delimiter alone. A
    /// blank line yields a record with no fields.
    fn read_record(&self, row: &str, line: usize) -> Result<StringRecord> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(self.delimiter)
            .from_reader(row.as_bytes());

        let mut record = StringRecord::new();
        reader
            .read_record(&mut record)
            .map_err(|e| Error::csv_record(line, e))?;
        Ok(record)
    }
}

/// Load the whole file, distinguishing a missing file from a failed read
fn load_content(file_path: &Path) -> Result<String> {
    if !file_path.is_file() {
        return Err(Error::file_not_found(file_path.display().to_string()));
    }

    std::fs::read_to_string(file_path).map_err(|e| {
        Error::io(
            format!("Failed to read file {}: {}", file_path.display(), e),
            e,
        )
    })
}
