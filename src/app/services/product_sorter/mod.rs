//! Sorting and grouping views over parsed products
//!
//! Every operation here takes a borrowed slice and returns a freshly built
//! collection. Inputs are never reordered in place, and every sort is stable
//! so ties keep their source order.
//!
//! # Architecture
//!
//! - [`sorting`] - Stable ascending sorts by price, quantity and name
//! - [`grouping`] - Grouping by the first word of the name, prices ascending per group
//!
//! # Example Usage
//!
//! ```rust
//! use product_sorter::app::models::Product;
//! use product_sorter::app::services::product_sorter::{
//!     group_by_first_word_then_sort_by_price, sort_by_price,
//! };
//! use rust_decimal::Decimal;
//!
//! let products = vec![
//!     Product::new("Widget A", None, Decimal::new(1099, 2), 100),
//!     Product::new("Widget B", None, Decimal::new(899, 2), 120),
//!     Product::new("Gadget C", None, Decimal::new(2495, 2), 50),
//! ];
//!
//! let by_price = sort_by_price(&products);
//! assert_eq!(by_price[0].name(), "Widget B");
//!
//! let groups = group_by_first_word_then_sort_by_price(&products);
//! let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["Gadget", "Widget"]);
//! assert_eq!(groups["Widget"][0].name(), "Widget B");
//! ```

pub mod grouping;
pub mod sorting;

#[cfg(test)]
pub mod tests;

pub use grouping::{ProductGroups, first_word, group_by_first_word_then_sort_by_price};
pub use sorting::{SortKey, sort_by_name, sort_by_price, sort_by_quantity};
