//! Discovery of product list files in a data directory
//!
//! Files are matched by a glob pattern against names directly inside the
//! directory (no recursion) and returned in name order so menu numbering is
//! stable between runs.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Information about a discovered product file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// File name without directory
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size_bytes: u64,
}

impl DiscoveredFile {
    /// Human-readable file size
    pub fn size_label(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// Find files in `data_dir` whose names match `pattern`
pub fn discover_product_files(data_dir: &Path, pattern: &str) -> Result<Vec<DiscoveredFile>> {
    if !data_dir.is_dir() {
        return Err(Error::file_discovery(format!(
            "data directory not found: {}",
            data_dir.display()
        )));
    }

    let escaped_dir = glob::Pattern::escape(&data_dir.to_string_lossy());
    let full_pattern = Path::new(&escaped_dir).join(pattern);
    debug!("Scanning for product files: {}", full_pattern.display());

    let mut files = Vec::new();
    for entry in glob::glob(&full_pattern.to_string_lossy())? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        let size_bytes = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        files.push(DiscoveredFile {
            name,
            path,
            size_bytes,
        });
    }

    // Sort by name for consistent ordering
    files.sort_by(|a, b| a.name.cmp(&b.name));

    debug!("Found {} product files", files.len());
    Ok(files)
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
