//! Tests for product sorting and grouping
//!
//! A fixed sample list keeps results repeatable; the tie-heavy list exercises
//! stability.

mod sorting_tests;

use crate::app::models::Product;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn product(name: &str, price: &str, quantity: u32) -> Product {
    Product::new(name, None, Decimal::from_str(price).unwrap(), quantity)
}

/// Sample products used across the sorter tests
pub fn sample_products() -> Vec<Product> {
    vec![
        product("Widget A", "10.99", 100),
        product("Widget B", "8.99", 120),
        product("Gadget C", "24.95", 50),
        product("Gadget D", "19.99", 60),
    ]
}

/// Products with repeated prices, quantities and names
pub fn products_with_ties() -> Vec<Product> {
    vec![
        product("Bolt M6", "1.00", 10),
        product("Anchor", "2.50", 5),
        product("Bolt M8", "1.00", 5),
        product("Anchor", "0.75", 10),
        product("Clamp", "2.50", 10),
        product("Bolt", "1.00", 7),
    ]
}
