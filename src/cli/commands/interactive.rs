//! Interactive product file browser
//!
//! Presents the product files found in the data directory, loads the one the
//! user picks and offers sorted or grouped views of it until the user goes
//! back or exits. Input and output are generic so sessions can be scripted.

use super::display::{format_diagnostics, render_view};
use super::shared::load_products;
use crate::app::services::file_discovery::{DiscoveredFile, discover_product_files};
use crate::cli::args::View;
use crate::config::Config;
use crate::{Error, Result as CrateResult};
use anyhow::{Context, Result};
use colored::*;
use std::io::{BufRead, Write};
use tracing::debug;

/// Selection made on the file menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChoice {
    Exit,
    /// Zero-based index into the discovered files
    File(usize),
}

/// Selection made on the view menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Show(View),
    Back,
    Exit,
}

/// Where control goes after leaving a file's view menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    BackToFiles,
    Exit,
}

/// Interpret a file menu entry; `0` exits, `1..=file_count` picks a file
pub fn parse_file_selection(input: &str, file_count: usize) -> CrateResult<FileChoice> {
    let selection: usize = input.trim().parse().map_err(|_| {
        Error::invalid_selection(format!(
            "'{}' is not a number. Please enter a number between 0 and {}.",
            input.trim(),
            file_count
        ))
    })?;

    match selection {
        0 => Ok(FileChoice::Exit),
        n if n <= file_count => Ok(FileChoice::File(n - 1)),
        n => Err(Error::invalid_selection(format!(
            "{} is out of range. Please enter a number between 0 and {}.",
            n, file_count
        ))),
    }
}

/// Interpret a view menu entry
pub fn parse_menu_selection(input: &str) -> CrateResult<MenuChoice> {
    match input.trim() {
        "1" => Ok(MenuChoice::Show(View::Price)),
        "2" => Ok(MenuChoice::Show(View::Quantity)),
        "3" => Ok(MenuChoice::Show(View::Name)),
        "4" => Ok(MenuChoice::Show(View::Group)),
        "5" => Ok(MenuChoice::Back),
        "6" => Ok(MenuChoice::Exit),
        other => Err(Error::invalid_selection(format!(
            "'{}' is not a menu option. Please try again.",
            other
        ))),
    }
}

/// Menu-driven browser over product files
pub struct Browser<'a, R, W> {
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Browser<'a, R, W> {
    pub fn new(config: &'a Config, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Run the browser until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let files = discover_product_files(&self.config.data_dir, &self.config.file_pattern)
                .context("Failed to scan for product files")?;
            self.print_file_menu(&files)?;

            let Some(line) = self.prompt("Select a file by number, or type 0 to exit: ")? else {
                break;
            };

            match parse_file_selection(&line, files.len()) {
                Ok(FileChoice::Exit) => break,
                Ok(FileChoice::File(index)) => {
                    if self.browse_file(&files[index])? == Flow::Exit {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{}", e.to_string().yellow())?,
            }
        }

        writeln!(self.output, "\nProgram exited.")?;
        Ok(())
    }

    fn browse_file(&mut self, file: &DiscoveredFile) -> Result<Flow> {
        debug!("Opening {}", file.path.display());
        let result = load_products(self.config, &file.path);

        if result.is_empty() {
            writeln!(
                self.output,
                "{}",
                "No products to display. Returning to file selection.".yellow()
            )?;
            return Ok(Flow::BackToFiles);
        }

        if result.stats.rows_skipped > 0 {
            writeln!(
                self.output,
                "Loaded {} products from {} ({} rows skipped).",
                result.products.len(),
                file.name,
                result.stats.rows_skipped
            )?;
        } else {
            writeln!(
                self.output,
                "Loaded {} products from {}.",
                result.products.len(),
                file.name
            )?;
        }

        if result.stats.has_diagnostics() {
            write!(
                self.output,
                "{}",
                format_diagnostics(&result.stats).yellow()
            )?;
        }

        loop {
            self.print_view_menu()?;

            let Some(line) = self.prompt("Choice: ")? else {
                return Ok(Flow::Exit);
            };

            match parse_menu_selection(&line) {
                Ok(MenuChoice::Show(view)) => {
                    writeln!(self.output)?;
                    write!(self.output, "{}", render_view(&result.products, view))?;
                }
                Ok(MenuChoice::Back) => return Ok(Flow::BackToFiles),
                Ok(MenuChoice::Exit) => return Ok(Flow::Exit),
                Err(e) => writeln!(self.output, "{}", e.to_string().yellow())?,
            }
        }
    }

    fn print_file_menu(&mut self, files: &[DiscoveredFile]) -> Result<()> {
        writeln!(self.output)?;
        if files.is_empty() {
            writeln!(
                self.output,
                "{}",
                format!(
                    "No files matching {} found in {}",
                    self.config.file_pattern,
                    self.config.data_dir.display()
                )
                .yellow()
            )?;
            return Ok(());
        }

        writeln!(self.output, "{}", "Available product files:".bright_green().bold())?;
        for (i, file) in files.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} {}",
                (i + 1).to_string().bright_yellow().bold(),
                file.name.bright_cyan(),
                format!("({})", file.size_label()).bright_black()
            )?;
        }
        Ok(())
    }

    fn print_view_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "Choose a sorting option:".bright_green().bold())?;
        writeln!(self.output, "  1. Sort by Price (ascending)")?;
        writeln!(self.output, "  2. Sort by Quantity (ascending)")?;
        writeln!(self.output, "  3. Sort by Product Name (ascending)")?;
        writeln!(
            self.output,
            "  4. Group by Product Name and sort each group by Price (ascending)"
        )?;
        writeln!(self.output, "  5. Return to file selection")?;
        writeln!(self.output, "  6. Exit program")?;
        Ok(())
    }

    /// Print a prompt and read one line, `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text.bright_white())?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read user input")?;

        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}
