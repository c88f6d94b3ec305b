/// Thai Scanner - finds untranslated Thai text in source files
///
/// This library scans a list of files under a base directory and reports every
/// distinct run of Thai script it finds, so that the strings can be moved into
/// translation tables by hand.

pub mod config;
pub mod core;
pub mod utils;

// Re-export main scanner types for convenience
pub use crate::config::ScanConfig;
pub use crate::core::error::ScanError;
pub use crate::core::patterns::MatchSet;
pub use crate::core::scanner::{ScanResult, Scanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a list of files relative to a base directory
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `base_dir` - Directory the paths are relative to
/// * `files` - Relative file paths, scanned in order
///
/// # Returns
///
/// One result per path, in the same order
pub fn scan_files<P: AsRef<std::path::Path>>(base_dir: P, files: &[&str]) -> Vec<ScanResult> {
    let config = ScanConfig::new(
        base_dir.as_ref(),
        files.iter().map(|f| f.to_string()).collect(),
    );
    Scanner::new(&config).scan()
}
