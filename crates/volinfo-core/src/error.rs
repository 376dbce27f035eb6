//! Error types for scanning operations.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that stop a volume scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The traversal itself failed after it started and cannot continue.
    #[error("Walk of {path} aborted: {message}")]
    Walk { path: PathBuf, message: String },
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Permission was denied.
    PermissionDenied,
    /// Path does not exist (e.g. the volume is not mounted).
    NotFound,
    /// Path exists but is not a directory.
    NotADirectory,
    /// Error reading a directory.
    ReadError,
    /// Error reading metadata.
    MetadataError,
}

/// Non-fatal problem encountered during a scan.
///
/// The affected entry does not contribute to any time record.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning for a failed read of an entry, classifying by error kind.
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let kind = match error.kind() {
            std::io::ErrorKind::PermissionDenied => WarningKind::PermissionDenied,
            std::io::ErrorKind::NotFound => WarningKind::NotFound,
            _ => WarningKind::ReadError,
        };
        Self {
            path: path.into(),
            message: format!("Read error: {error}"),
            kind,
        }
    }

    /// Create a warning for a path that should have been a directory.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Not a directory: {}", path.display()),
            path,
            kind: WarningKind::NotADirectory,
        }
    }

    /// Create a metadata error warning.
    pub fn metadata_error(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: format!("Metadata error: {error}"),
            kind: WarningKind::MetadataError,
        }
    }
}
