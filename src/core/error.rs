/// Error types for the scanner
///
/// Every variant is recoverable: the scanner turns it into a per-file
/// outcome and moves on to the next path.

use std::io;
use std::path::{Path, PathBuf};

/// Failure while locating or reading a file to scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The resolved path does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but its content is not valid UTF-8
    #[error("{path} is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },

    /// The process is not allowed to read the file
    #[error("permission denied reading {path}")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure (directory instead of file, device error, ...)
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path),
            io::ErrorKind::InvalidData => ScanError::InvalidUtf8 { path },
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied { path },
            _ => ScanError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ScanError::NotFound(path)
            | ScanError::InvalidUtf8 { path }
            | ScanError::PermissionDenied { path }
            | ScanError::Io { path, .. } => path,
        }
    }

    /// Short human-readable reason, without the path
    pub fn reason(&self) -> String {
        match self {
            ScanError::NotFound(_) => "file not found".to_string(),
            ScanError::InvalidUtf8 { .. } => "invalid UTF-8 content".to_string(),
            ScanError::PermissionDenied { .. } => "permission denied".to_string(),
            ScanError::Io { source, .. } => source.to_string(),
        }
    }
}
