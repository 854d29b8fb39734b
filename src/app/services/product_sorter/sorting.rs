//! Stable ascending sorts over products

use crate::app::models::Product;
use tracing::debug;

/// Field a product list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Quantity,
    /// Ordinal (byte-wise) name order, not locale collation
    Name,
}

impl SortKey {
    /// Sort a copy of `products` by this key
    pub fn apply(self, products: &[Product]) -> Vec<Product> {
        debug!("Sorting {} products by {}", products.len(), self);
        match self {
            SortKey::Price => sort_by_price(products),
            SortKey::Quantity => sort_by_quantity(products),
            SortKey::Name => sort_by_name(products),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortKey::Price => "price",
            SortKey::Quantity => "quantity",
            SortKey::Name => "name",
        };
        write!(f, "{}", label)
    }
}

/// Products ordered by ascending price
pub fn sort_by_price(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by_key(|p| p.price());
    sorted
}

/// Products ordered by ascending quantity
pub fn sort_by_quantity(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by_key(|p| p.quantity());
    sorted
}

/// Products ordered by name, comparing bytes
pub fn sort_by_name(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}
