/// Core scanner implementation
///
/// This file contains the Scanner, which walks an ordered list of files under a
/// base directory and classifies each one by the Thai text it contains.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::ScanConfig;
use crate::core::error::ScanError;
use crate::core::patterns::{self, MatchSet};
use crate::utils::file_utils::{read_text_file, resolve_path};

/// Outcome of scanning one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanResult {
    /// The resolved path does not exist
    FileMissing { path: PathBuf },

    /// The file was read but holds no Thai text
    NoMatches { path: PathBuf },

    /// The file holds Thai text
    Matches {
        path: PathBuf,
        /// Number of runs found, duplicates included
        occurrences: usize,
        matches: MatchSet,
    },

    /// The file exists but could not be read as UTF-8 text
    ReadFailure { path: PathBuf, reason: String },
}

impl ScanResult {
    /// Path the outcome refers to
    pub fn path(&self) -> &Path {
        match self {
            ScanResult::FileMissing { path }
            | ScanResult::NoMatches { path }
            | ScanResult::Matches { path, .. }
            | ScanResult::ReadFailure { path, .. } => path,
        }
    }

    /// Distinct matches, empty unless the file held Thai text
    pub fn matches(&self) -> Option<&MatchSet> {
        match self {
            ScanResult::Matches { matches, .. } => Some(matches),
            _ => None,
        }
    }

    /// Short status label used in reports
    pub fn status(&self) -> &'static str {
        match self {
            ScanResult::FileMissing { .. } => "file_missing",
            ScanResult::NoMatches { .. } => "no_matches",
            ScanResult::Matches { .. } => "matches",
            ScanResult::ReadFailure { .. } => "read_failure",
        }
    }

    /// Classify the text content of a file
    pub fn from_content(path: PathBuf, content: &str) -> Self {
        let (occurrences, matches) = patterns::collect_matches(content);
        if matches.is_empty() {
            ScanResult::NoMatches { path }
        } else {
            ScanResult::Matches { path, occurrences, matches }
        }
    }

    fn from_error(err: ScanError) -> Self {
        match err {
            ScanError::NotFound(path) => ScanResult::FileMissing { path },
            other => ScanResult::ReadFailure {
                path: other.path().to_path_buf(),
                reason: other.reason(),
            },
        }
    }
}

/// Sequential scanner over a fixed list of files
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Directory every relative path is joined to
    base_dir: PathBuf,

    /// Relative paths, scanned in order
    files: Vec<String>,
}

impl Scanner {
    /// Create a new Scanner from a configuration
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            files: config.files.clone(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Scan every configured file, in order
    ///
    /// # Returns
    ///
    /// Exactly one result per configured path
    pub fn scan(&self) -> Vec<ScanResult> {
        self.scan_with(|_| {})
    }

    /// Scan every configured file, handing each result to `on_result` as soon
    /// as it is produced
    pub fn scan_with<F>(&self, mut on_result: F) -> Vec<ScanResult>
    where
        F: FnMut(&ScanResult),
    {
        info!(
            "Scanning {} files under {}",
            self.files.len(),
            self.base_dir.display()
        );

        let mut results = Vec::with_capacity(self.files.len());
        for relative in &self.files {
            let result = self.scan_file(relative);
            on_result(&result);
            results.push(result);
        }
        results
    }

    /// Scan a single file relative to the base directory
    ///
    /// Missing files are reported without any read attempt; read failures
    /// degrade to `ScanResult::ReadFailure`.
    pub fn scan_file(&self, relative: &str) -> ScanResult {
        let path = resolve_path(&self.base_dir, relative);

        if !path.exists() {
            warn!("File not found: {}", path.display());
            return ScanResult::FileMissing { path };
        }

        debug!("Reading {}", path.display());
        match read_text_file(&path) {
            Ok(content) => {
                let result = ScanResult::from_content(path, &content);
                if let ScanResult::Matches { path, matches, .. } = &result {
                    info!("{} distinct Thai strings in {}", matches.len(), path.display());
                }
                result
            }
            Err(e) => {
                warn!("{}", e);
                ScanResult::from_error(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn set(values: &[&str]) -> MatchSet {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_content() {
        let result = ScanResult::from_content(PathBuf::from("a.txt"), "สวัสดี hello ทดสอบ");
        assert_eq!(result.matches(), Some(&set(&["สวัสดี", "ทดสอบ"])));
        assert_eq!(result.status(), "matches");

        let result = ScanResult::from_content(PathBuf::from("b.txt"), "hello");
        assert_eq!(result, ScanResult::NoMatches { path: PathBuf::from("b.txt") });
    }

    #[test]
    fn test_from_error() {
        let missing = ScanResult::from_error(ScanError::NotFound(PathBuf::from("x.js")));
        assert_eq!(missing, ScanResult::FileMissing { path: PathBuf::from("x.js") });

        let failure = ScanResult::from_error(ScanError::InvalidUtf8 { path: PathBuf::from("y.js") });
        assert_eq!(
            failure,
            ScanResult::ReadFailure {
                path: PathBuf::from("y.js"),
                reason: "invalid UTF-8 content".to_string(),
            }
        );
    }

    #[test]
    fn test_scan_file_outcomes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "ราคา 100 บาท").unwrap();
        fs::write(dir.path().join("plain.txt"), "price: 100").unwrap();
        fs::write(dir.path().join("bad.txt"), [0xffu8, 0xfe]).unwrap();

        let config = ScanConfig::new(dir.path(), Vec::new());
        let scanner = Scanner::new(&config);

        match scanner.scan_file("a.txt") {
            ScanResult::Matches { path, occurrences, matches } => {
                assert_eq!(path, dir.path().join("a.txt"));
                assert_eq!(occurrences, 2);
                assert_eq!(matches, set(&["ราคา", "บาท"]));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert_eq!(
            scanner.scan_file("plain.txt"),
            ScanResult::NoMatches { path: dir.path().join("plain.txt") }
        );
        assert_eq!(
            scanner.scan_file("b.txt"),
            ScanResult::FileMissing { path: dir.path().join("b.txt") }
        );
        assert_eq!(scanner.scan_file("bad.txt").status(), "read_failure");
    }

    #[test]
    fn test_scan_preserves_order_and_count() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.js"), "'หนึ่ง'").unwrap();
        let files = vec!["missing.js".to_string(), "one.js".to_string(), "missing.js".to_string()];
        let scanner = Scanner::new(&ScanConfig::new(dir.path(), files));

        let mut seen = Vec::new();
        let results = scanner.scan_with(|r| seen.push(r.status()));

        assert_eq!(results.len(), 3);
        assert_eq!(seen, vec!["file_missing", "matches", "file_missing"]);
    }

    #[test]
    fn test_serialize_tagged() {
        let result = ScanResult::Matches {
            path: PathBuf::from("a.txt"),
            occurrences: 1,
            matches: set(&["บาท"]),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "matches");
        assert_eq!(json["occurrences"], 1);
        assert_eq!(json["matches"][0], "บาท");
    }
}
