//! Common error types used across the workspace.
//!
//! Each layer converts into these via `#[from]`; adapters map them onto HTTP
//! status codes at the edge.

use std::path::PathBuf;

/// Top-level error for read-style operations (downloads, report lookups).
#[derive(Debug, thiserror::Error)]
pub enum SandmanError {
    /// The requested resource does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Unexpected failure talking to the filesystem.
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// A resource lookup that came back empty.
#[derive(Debug, thiserror::Error)]
#[error("{resource} not found: {key}")]
pub struct NotFoundError {
    /// What kind of thing was looked up (`"config file"`, `"report"`, …).
    pub resource: &'static str,
    /// The key that was looked up (path, date, …).
    pub key: String,
}

/// A filesystem operation that failed for a reason other than absence.
#[derive(Debug, thiserror::Error)]
#[error("i/o failure on {}", .path.display())]
pub struct StorageError {
    /// Path the operation was acting on.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Failure modes of copying the default config over the live config.
///
/// `PermissionDenied` is kept separate from every other cause because it is
/// the one case that triggers the elevated retry.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// The caller lacks permission to overwrite the destination.
    #[error("permission denied copying {} over {}", .from.display(), .to.display())]
    PermissionDenied {
        /// Source path (the default config).
        from: PathBuf,
        /// Destination path (the live config).
        to: PathBuf,
    },

    /// Any other failure (missing source, disk full, failed subprocess, …).
    #[error("copying {} over {} failed", .from.display(), .to.display())]
    Failed {
        /// Source path (the default config).
        from: PathBuf,
        /// Destination path (the live config).
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Terminal failure of the reset operation, after the elevated retry (if any)
/// has also failed. Handlers convert this into a user-visible notice, never
/// into an error response.
#[derive(Debug, thiserror::Error)]
#[error("the config file could not be reset")]
pub struct ResetError(#[from] pub CopyError);
