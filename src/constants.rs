//! Application constants for the product sorter
//!
//! This module contains default values, column layouts and display widths
//! used throughout the product sorter application.

// =============================================================================
// Input Discovery
// =============================================================================

/// Glob pattern matched against file names in the data directory
pub const DEFAULT_FILE_PATTERN: &str = "*ProductList*.csv";

/// Directory scanned for product files when none is given
pub const DEFAULT_DATA_DIR: &str = ".";

// =============================================================================
// CSV Layout
// =============================================================================

/// Field delimiter used by product list files
pub const DEFAULT_DELIMITER: u8 = b',';

/// Field count of the `name,price,quantity` layout
pub const BASIC_FIELD_COUNT: usize = 3;

/// Field count of the `name,category,price,quantity` layout
pub const CATEGORIZED_FIELD_COUNT: usize = 4;

/// Minimum number of lines in a usable file (header plus one data row)
pub const MIN_INPUT_LINES: usize = 2;

/// Line number of the header row
pub const HEADER_LINE: usize = 1;

/// UTF-8 byte order mark some spreadsheet exports prepend
pub const BYTE_ORDER_MARK: char = '\u{feff}';

// =============================================================================
// Table Display
// =============================================================================

pub const NAME_COLUMN_WIDTH: usize = 25;
pub const CATEGORY_COLUMN_WIDTH: usize = 15;
pub const PRICE_COLUMN_WIDTH: usize = 12;
pub const QUANTITY_COLUMN_WIDTH: usize = 10;

/// Decimal places shown for prices
pub const PRICE_DISPLAY_SCALE: usize = 2;

/// Currency shown in the price column heading
pub const CURRENCY_CODE: &str = "ZAR";

/// Width of the rule printed under a table heading with a category column
pub const CATEGORIZED_RULE_WIDTH: usize = 70;

/// Width of the rule printed under a table heading without a category column
pub const BASIC_RULE_WIDTH: usize = 55;
