//! Fixed-width table rendering for product views
//!
//! Tables are rendered to strings so commands can write them to any sink.

use crate::app::models::{Product, has_category};
use crate::app::services::product_csv_parser::ParseStats;
use crate::app::services::product_sorter::{ProductGroups, group_by_first_word_then_sort_by_price};
use crate::cli::args::View;
use crate::constants::{
    BASIC_RULE_WIDTH, CATEGORIZED_RULE_WIDTH, CATEGORY_COLUMN_WIDTH, CURRENCY_CODE,
    NAME_COLUMN_WIDTH, PRICE_COLUMN_WIDTH, PRICE_DISPLAY_SCALE, QUANTITY_COLUMN_WIDTH,
};

/// Render `products` in the order and shape `view` asks for
pub fn render_view(products: &[Product], view: View) -> String {
    let with_category = has_category(products);

    match view.sort_key() {
        Some(key) => format_table(&key.apply(products), with_category),
        None => format_groups(
            &group_by_first_word_then_sort_by_price(products),
            with_category,
        ),
    }
}

/// Render a single table with a heading and a dashed rule
pub fn format_table(products: &[Product], with_category: bool) -> String {
    let mut out = String::new();

    out.push_str(&format_heading(with_category));
    out.push('\n');
    let rule_width = if with_category {
        CATEGORIZED_RULE_WIDTH
    } else {
        BASIC_RULE_WIDTH
    };
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for product in products {
        out.push_str(&format_row(product, with_category));
        out.push('\n');
    }

    out
}

/// Render one table per group, each introduced by `Group: <key>`
pub fn format_groups(groups: &ProductGroups, with_category: bool) -> String {
    let mut out = String::new();

    for (key, members) in groups {
        out.push_str(&format!("\nGroup: {}\n", key));
        out.push_str(&format_table(members, with_category));
    }

    out
}

/// List the parse diagnostics under a `Warnings:` heading, or nothing
pub fn format_diagnostics(stats: &ParseStats) -> String {
    if !stats.has_diagnostics() {
        return String::new();
    }

    let mut out = String::from("Warnings:\n");
    for diagnostic in &stats.diagnostics {
        out.push_str(&format!("  - {}\n", diagnostic));
    }
    out
}

fn format_heading(with_category: bool) -> String {
    let price_heading = format!("Price ({})", CURRENCY_CODE);

    if with_category {
        format!(
            "{:<nw$} {:<cw$} {:>pw$} {:>qw$}",
            "Product Name",
            "Category",
            price_heading,
            "Quantity",
            nw = NAME_COLUMN_WIDTH,
            cw = CATEGORY_COLUMN_WIDTH,
            pw = PRICE_COLUMN_WIDTH,
            qw = QUANTITY_COLUMN_WIDTH,
        )
    } else {
        format!(
            "{:<nw$} {:>pw$} {:>qw$}",
            "Product Name",
            price_heading,
            "Quantity",
            nw = NAME_COLUMN_WIDTH,
            pw = PRICE_COLUMN_WIDTH,
            qw = QUANTITY_COLUMN_WIDTH,
        )
    }
}

fn format_row(product: &Product, with_category: bool) -> String {
    let price = format_price(product);

    if with_category {
        format!(
            "{:<nw$} {:<cw$} {:>pw$} {:>qw$}",
            product.name(),
            product.category().unwrap_or_default(),
            price,
            product.quantity(),
            nw = NAME_COLUMN_WIDTH,
            cw = CATEGORY_COLUMN_WIDTH,
            pw = PRICE_COLUMN_WIDTH,
            qw = QUANTITY_COLUMN_WIDTH,
        )
    } else {
        format!(
            "{:<nw$} {:>pw$} {:>qw$}",
            product.name(),
            price,
            product.quantity(),
            nw = NAME_COLUMN_WIDTH,
            pw = PRICE_COLUMN_WIDTH,
            qw = QUANTITY_COLUMN_WIDTH,
        )
    }
}

/// Price with exactly two decimal places
fn format_price(product: &Product) -> String {
    let mut price = product.price();
    price.rescale(PRICE_DISPLAY_SCALE as u32);
    price.to_string()
}
