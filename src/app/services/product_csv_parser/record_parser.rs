//! Individual record parsing for product list files
//!
//! This module turns one delimited data record into a [`Product`], validating
//! the field count against the detected layout before any field is read.

use csv::StringRecord;

use super::field_parsers::{parse_name, parse_price, parse_quantity};
use crate::app::models::{Layout, Product};
use crate::{Error, Result};

/// Parse a single data record
///
/// `line` is the 1-based line number in the source file and is carried into
/// every error so diagnostics point at the offending row.
pub fn parse_product_record(
    record: &StringRecord,
    line: usize,
    layout: Layout,
) -> Result<Product> {
    if record.len() != layout.field_count() {
        return Err(Error::malformed_row(
            line,
            layout.field_count(),
            record.len(),
        ));
    }

    let field = |index: usize| record.get(index).map(str::trim).unwrap_or_default();

    let name = parse_name(field(layout.name_index()), line)?;
    let category = layout.category_index().map(|index| field(index).to_string());
    let price = parse_price(field(layout.price_index()), line)?;
    let quantity = parse_quantity(field(layout.quantity_index()), line)?;

    Ok(Product::new(name, category, price, quantity))
}
