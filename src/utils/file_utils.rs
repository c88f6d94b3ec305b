/// File handling utilities
///
/// This module provides path resolution, UTF-8 reading with classified
/// failures, and discovery of scannable files under a directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::ScanError;

/// Directories that never hold hand-written sources
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "dist", "build"];

/// Join a relative path onto the base directory
pub fn resolve_path(base_dir: &Path, relative: &str) -> PathBuf {
    base_dir.join(relative)
}

/// Read the full content of a file as UTF-8 text.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The file content, or a classified `ScanError`
pub fn read_text_file(file_path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(file_path).map_err(|e| ScanError::from_io(file_path, e))
}

/// Find files under `base_dir` whose extension is in `extensions`.
///
/// Hidden directories and common build/dependency directories are skipped.
/// Paths are returned relative to `base_dir`, with `/` separators, sorted.
pub fn discover_files(base_dir: &Path, extensions: &[String]) -> Result<Vec<String>> {
    if !base_dir.is_dir() {
        anyhow::bail!("Directory not found: {}", base_dir.display());
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(base_dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(base_dir)
            .with_context(|| format!("{} is outside {}", entry.path().display(), base_dir.display()))?;

        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        debug!("Discovered {}", relative);
        files.push(relative);
    }

    files.sort();
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.iter().any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(&ext))
        }
        None => false,
    }
}
