//! Parse outcome and statistics for product list files
//!
//! This module provides the result returned by every parse, the terminal
//! status of the input, and counters plus diagnostics for rejected rows.

use crate::app::models::{Layout, Product};

/// How far parsing got before producing its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// Header and data rows were read; individual rows may still have been skipped
    Parsed,

    /// The file was absent or could not be read
    MissingInput,

    /// Fewer than two lines were available
    MissingHeaderOrData,
}

/// Parsing result with products and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed products in source line order
    pub products: Vec<Product>,

    /// Layout detected from the header (defaults to basic when no header was read)
    pub layout: Layout,

    /// Terminal status of the input
    pub status: InputStatus,

    /// Row counters and diagnostics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Empty result for input that could not be parsed at all
    pub fn terminated(status: InputStatus, diagnostic: impl Into<String>) -> Self {
        let mut stats = ParseStats::new();
        stats.diagnostics.push(diagnostic.into());

        Self {
            products: Vec::new(),
            layout: Layout::default(),
            status,
            stats,
        }
    }

    /// True when there is nothing to sort or display
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseStats {
    /// Total number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Number of products successfully parsed
    pub products_parsed: usize,

    /// Number of rows skipped due to errors
    pub rows_skipped: usize,

    /// Human-readable reason for every skipped row, unexpected header or
    /// terminated read
    pub diagnostics: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.products_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
