//! Tests for the stable sorts

use super::*;
use crate::app::services::product_sorter::{
    SortKey, sort_by_name, sort_by_price, sort_by_quantity,
};

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name()).collect()
}

#[test]
fn test_sort_by_price_ascending() {
    let sorted = sort_by_price(&sample_products());

    assert_eq!(sorted.len(), 4);
    assert_eq!(sorted[0].price(), Decimal::from_str("8.99").unwrap());
    assert_eq!(
        names(&sorted),
        vec!["Widget B", "Widget A", "Gadget D", "Gadget C"]
    );
}

#[test]
fn test_sort_by_quantity_ascending() {
    let sorted = sort_by_quantity(&sample_products());

    assert_eq!(sorted[0].quantity(), 50);
    assert!(sorted.windows(2).all(|w| w[0].quantity() <= w[1].quantity()));
}

#[test]
fn test_sort_by_name_ascending() {
    let sorted = sort_by_name(&sample_products());

    assert!(sorted[0].name().starts_with("Gadget"));
    assert_eq!(
        names(&sorted),
        vec!["Gadget C", "Gadget D", "Widget A", "Widget B"]
    );
}

#[test]
fn test_sort_by_name_is_ordinal() {
    let products = vec![
        product("apple", "1", 1),
        product("Zebra", "1", 1),
        product("Äpfel", "1", 1),
        product("Banana", "1", 1),
    ];

    let sorted = sort_by_name(&products);

    assert_eq!(names(&sorted), vec!["Banana", "Zebra", "apple", "Äpfel"]);
}

#[test]
fn test_price_ties_keep_input_order() {
    let sorted = sort_by_price(&products_with_ties());

    assert_eq!(
        names(&sorted),
        vec!["Anchor", "Bolt M6", "Bolt M8", "Bolt", "Anchor", "Clamp"]
    );
    assert_eq!(sorted[0].price(), Decimal::from_str("0.75").unwrap());
    assert_eq!(sorted[4].price(), Decimal::from_str("2.50").unwrap());
}

#[test]
fn test_quantity_ties_keep_input_order() {
    let sorted = sort_by_quantity(&products_with_ties());

    assert_eq!(
        names(&sorted),
        vec!["Anchor", "Bolt M8", "Bolt", "Bolt M6", "Anchor", "Clamp"]
    );
}

#[test]
fn test_name_ties_keep_input_order() {
    let sorted = sort_by_name(&products_with_ties());

    assert_eq!(
        names(&sorted),
        vec!["Anchor", "Anchor", "Bolt", "Bolt M6", "Bolt M8", "Clamp"]
    );
    // Equal names stay in source order: 2.50 came before 0.75
    assert_eq!(sorted[0].price(), Decimal::from_str("2.50").unwrap());
    assert_eq!(sorted[1].price(), Decimal::from_str("0.75").unwrap());
}

#[test]
fn test_price_compares_numerically_not_textually() {
    let products = vec![
        product("A", "100", 1),
        product("B", "9.5", 1),
        product("C", "9.50", 1),
        product("D", "10", 1),
    ];

    let sorted = sort_by_price(&products);

    assert_eq!(names(&sorted), vec!["B", "C", "D", "A"]);
}

#[test]
fn test_sorts_are_idempotent() {
    let input = products_with_ties();

    for key in [SortKey::Price, SortKey::Quantity, SortKey::Name] {
        let once = key.apply(&input);
        let twice = key.apply(&once);
        assert_eq!(once, twice, "sort by {} is not idempotent", key);
    }
}

#[test]
fn test_sorts_preserve_length_and_do_not_mutate_input() {
    let input = products_with_ties();
    let snapshot = input.clone();

    for key in [SortKey::Price, SortKey::Quantity, SortKey::Name] {
        let sorted = key.apply(&input);
        assert_eq!(sorted.len(), input.len());
        for p in &input {
            assert!(sorted.contains(p));
        }
    }

    assert_eq!(input, snapshot);
}

#[test]
fn test_sort_key_dispatch() {
    let input = sample_products();

    assert_eq!(SortKey::Price.apply(&input), sort_by_price(&input));
    assert_eq!(SortKey::Quantity.apply(&input), sort_by_quantity(&input));
    assert_eq!(SortKey::Name.apply(&input), sort_by_name(&input));
    assert_eq!(SortKey::Quantity.to_string(), "quantity");
}

#[test]
fn test_empty_input() {
    assert!(sort_by_price(&[]).is_empty());
    assert!(sort_by_quantity(&[]).is_empty());
    assert!(sort_by_name(&[]).is_empty());
}
