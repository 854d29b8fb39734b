//! Test utilities for product CSV parser testing
//!
//! This module provides sample file contents and temporary file helpers
//! used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Three-column product list with one row per product
pub fn create_basic_product_csv() -> String {
    r#"Product Name,Price (ZAR),Quantity
Widget A,10.99,100
Widget B,8.99,120
Gadget C,24.95,50
Gadget D,19.99,60"#
        .to_string()
}

/// Four-column product list with a category per product
pub fn create_categorized_product_csv() -> String {
    r#"Product Name,Category,Price (ZAR),Quantity
Widget A,Tools,10.99,100
Gizmo X,Electronics,149.50,7
Widget B,Tools,8.99,120"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
