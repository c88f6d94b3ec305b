/// Scanner configuration
///
/// The base directory and file list are passed explicitly to the scanner.
/// Defaults cover the page files of the front-end that is being localised;
/// a JSON file can override any field.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory the default file list is relative to
pub const DEFAULT_BASE_DIR: &str = "src/pages";

/// Pages that still needed translation when the scanner was written
pub const DEFAULT_FILES: &[&str] = &[
    "index.js",
    "bills/BillPage.js",
    "bills/BillsListPage.js",
    "products/ProductPage.js",
    "profile/index.js",
    "admin/orders.js",
    "admin/products.js",
    "docs.js",
];

/// Extensions picked up by file discovery when none are given
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// What to scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory every relative path is joined to
    pub base_dir: PathBuf,
    /// Relative file paths, scanned in this order
    pub files: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ScanConfig {
    pub fn new<P: Into<PathBuf>>(base_dir: P, files: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            files,
        }
    }

    /// Parse a configuration from JSON text; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid JSON in configuration")
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Configuration file not found: {}", path.display()))?;
        let config = Self::from_json(&config_str)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Override the base directory when one is given
    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        if let Some(base_dir) = base_dir {
            self.base_dir = base_dir;
        }
        self
    }

    /// Override the file list when it is non-empty
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        if !files.is_empty() {
            self.files = files;
        }
        self
    }
}
