//! One-shot view of a single product file

use super::display::{format_diagnostics, render_view};
use super::shared::load_products;
use crate::cli::args::ShowArgs;
use crate::config::Config;
use anyhow::Result;
use std::io::Write;

/// Load the file named in `args` and write the requested view to `output`
///
/// Unreadable or empty input is not an error: a notice is written instead
/// and the reasons are logged.
pub fn run_show(config: &Config, args: &ShowArgs, output: &mut impl Write) -> Result<()> {
    let result = load_products(config, &args.file);

    if result.is_empty() {
        writeln!(output, "No products to display.")?;
        return Ok(());
    }

    write!(output, "{}", render_view(&result.products, args.view))?;

    if result.stats.has_diagnostics() {
        write!(output, "\n{}", format_diagnostics(&result.stats))?;
    }

    if result.stats.rows_skipped > 0 {
        writeln!(
            output,
            "{} of {} rows skipped.",
            result.stats.rows_skipped, result.stats.total_rows
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::View;
    use std::fs;
    use tempfile::TempDir;

    fn show(config: &Config, file: std::path::PathBuf, view: View) -> String {
        let mut output = Vec::new();
        run_show(config, &ShowArgs { file, view }, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_show_name_view() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ProductList.csv");
        fs::write(
            &path,
            concat!(
                "Product Name,Category,Price (ZAR),Quantity\n",
                "Widget B,Tools,8.99,120\n",
                "Gadget C,Toys,24.95,50\n",
                "bad row\n"
            ),
        )
        .unwrap();

        let output = show(&Config::default(), path, View::Name);

        assert!(output.contains("Category"));
        assert!(output.find("Gadget C").unwrap() < output.find("Widget B").unwrap());
        assert!(
            output.contains("Warnings:\n  - Skipping invalid line 4: expected 4 fields, found 1")
        );
        assert!(output.contains("1 of 3 rows skipped."));
    }

    #[test]
    fn test_show_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let output = show(&Config::default(), temp_dir.path().join("nope.csv"), View::Price);

        assert_eq!(output, "No products to display.\n");
    }

    #[test]
    fn test_show_reports_unexpected_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ProductList.csv");
        fs::write(&path, "a,b,c,d,e\nWidget A,1.00,2\n").unwrap();

        let output = show(&Config::default(), path, View::Price);

        assert!(output.contains("Widget A"));
        assert!(output.contains("Warnings:\n  - Header has 5 field(s)"));
        assert!(!output.contains("rows skipped"));
    }
}
