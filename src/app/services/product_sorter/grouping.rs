//! Grouping products by the first word of their name

use super::sorting::sort_by_price;
use crate::app::models::Product;
use std::collections::BTreeMap;
use tracing::debug;

/// Groups keyed by first word, iterated in ascending ordinal key order
pub type ProductGroups = BTreeMap<String, Vec<Product>>;

/// Text of `name` before its first space, or the whole name without one
pub fn first_word(name: &str) -> &str {
    name.split_once(' ').map_or(name, |(word, _)| word)
}

/// Group products by the first word of their name and order each group by price
///
/// This function works in two phases:
/// 1. Partition products by [`first_word`], keeping source order within each group
/// 2. Stable-sort every group by ascending price
///
/// Group keys are ordered by `String`'s byte-wise ordering, so `"Zeta"` sorts
/// before `"alpha"`.
pub fn group_by_first_word_then_sort_by_price(products: &[Product]) -> ProductGroups {
    let mut partitions: BTreeMap<String, Vec<Product>> = BTreeMap::new();

    for product in products {
        partitions
            .entry(first_word(product.name()).to_string())
            .or_default()
            .push(product.clone());
    }

    debug!(
        "Grouped {} products into {} groups",
        products.len(),
        partitions.len()
    );

    partitions
        .into_iter()
        .map(|(key, members)| (key, sort_by_price(&members)))
        .collect()
}
