//! Listing of discovered product files

use crate::app::services::file_discovery::discover_product_files;
use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use std::io::Write;

/// Write the product files found in the configured directory to `output`
pub fn run_list(config: &Config, output: &mut impl Write) -> Result<()> {
    let files = discover_product_files(&config.data_dir, &config.file_pattern)
        .context("Failed to scan for product files")?;

    if files.is_empty() {
        writeln!(
            output,
            "No files matching {} found in {}",
            config.file_pattern,
            config.data_dir.display()
        )?;
        return Ok(());
    }

    for file in &files {
        writeln!(
            output,
            "{} {}",
            file.path.display(),
            format!("({})", file.size_label()).bright_black()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lists_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ProductList_1.csv"), "a,b,c\n").unwrap();
        fs::write(temp_dir.path().join("other.csv"), "a,b,c\n").unwrap();

        let config = Config::default().with_data_dir(temp_dir.path());
        let mut output = Vec::new();
        run_list(&config, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("ProductList_1.csv"));
        assert!(!output.contains("other.csv"));
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let config = Config::default().with_data_dir(temp_dir.path());
        let mut output = Vec::new();
        run_list(&config, &mut output).unwrap();

        assert!(String::from_utf8(output).unwrap().starts_with("No files matching"));
    }
}
