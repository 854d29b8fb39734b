//! CSV parser for product list files
//!
//! This module turns the raw text of a product list into validated
//! [`Product`](crate::app::models::Product) records. Rows that fail validation
//! are skipped and reported; they never abort the rest of the read.
//!
//! ## Architecture
//!
//! - [`parser`] - File loading, layout detection and the row loop
//! - [`record_parser`] - Turning one data row into a product
//! - [`field_parsers`] - Locale-invariant price and quantity parsing
//! - [`stats`] - Parse outcome, statistics and diagnostics
//!
//! ## Usage
//!
//! ```rust
//! use product_sorter::app::services::product_csv_parser::ProductCsvParser;
//!
//! let parser = ProductCsvParser::default();
//! let result = parser.parse_str("Product Name,Price (ZAR),Quantity\nWidget A,10.99,100");
//!
//! assert_eq!(result.products.len(), 1);
//! assert_eq!(result.products[0].name(), "Widget A");
//! ```

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::ProductCsvParser;
pub use stats::{InputStatus, ParseResult, ParseStats};
