/// Error types for scan startup and report export.
use std::path::PathBuf;
use thiserror::Error;

/// Fatal pre-walk failures.
///
/// Once the walk has started, failures are either per-node placeholder
/// lines or a cancellation outcome — never a `ScanError`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path does not exist: {0}")]
    RootNotFound(PathBuf),
    #[error("not a directory: {0}")]
    RootNotADirectory(PathBuf),
}

/// Export failures.
///
/// A separate channel from scan failures: a failed save leaves the
/// in-memory report intact so the caller can retry without rescanning.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no completed report to export")]
    NothingToExport,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
