//! Data models for product lists
//!
//! This module contains the product record and the column layouts a product
//! list file may use.

use crate::constants::{BASIC_FIELD_COUNT, CATEGORIZED_FIELD_COUNT};
use rust_decimal::Decimal;

// =============================================================================
// Column Layout
// =============================================================================

/// Column layout of a product list, detected once from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// `name,price,quantity`
    #[default]
    Basic,

    /// `name,category,price,quantity`
    Categorized,
}

impl Layout {
    /// Layout selected by a header with `field_count` fields
    ///
    /// Four fields select [`Layout::Categorized`] and three select
    /// [`Layout::Basic`]. Any other width has no layout of its own; callers
    /// fall back to [`Layout::default`] so rows are still checked against a
    /// fixed shape.
    pub fn from_field_count(field_count: usize) -> Option<Self> {
        match field_count {
            CATEGORIZED_FIELD_COUNT => Some(Layout::Categorized),
            BASIC_FIELD_COUNT => Some(Layout::Basic),
            _ => None,
        }
    }

    /// Number of fields every data row must have
    pub fn field_count(self) -> usize {
        match self {
            Layout::Basic => BASIC_FIELD_COUNT,
            Layout::Categorized => CATEGORIZED_FIELD_COUNT,
        }
    }

    pub fn name_index(self) -> usize {
        0
    }

    pub fn category_index(self) -> Option<usize> {
        match self {
            Layout::Basic => None,
            Layout::Categorized => Some(1),
        }
    }

    pub fn price_index(self) -> usize {
        match self {
            Layout::Basic => 1,
            Layout::Categorized => 2,
        }
    }

    pub fn quantity_index(self) -> usize {
        match self {
            Layout::Basic => 2,
            Layout::Categorized => 3,
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Basic => write!(f, "name,price,quantity"),
            Layout::Categorized => write!(f, "name,category,price,quantity"),
        }
    }
}

// =============================================================================
// Product Record
// =============================================================================

/// A single product parsed from one data row
///
/// Products are never modified after construction. Sorting and grouping
/// clone them into new collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    name: String,
    category: Option<String>,
    price: Decimal,
    quantity: u32,
}

impl Product {
    /// Create a product from already validated field values
    pub fn new(
        name: impl Into<String>,
        category: Option<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category, present only for products read with [`Layout::Categorized`]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Whether any product carries a non-empty category
///
/// Used to choose between the three and four column table layouts.
pub fn has_category(products: &[Product]) -> bool {
    products
        .iter()
        .any(|p| p.category().is_some_and(|c| !c.is_empty()))
}
