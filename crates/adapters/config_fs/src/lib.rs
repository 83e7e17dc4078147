//! # sandman-web-adapter-config-fs
//!
//! Filesystem implementation of the config store ports.
//!
//! ## Responsibilities
//! - Read the live config file (bytes + modification time) for downloads
//! - Copy the default config over the live config for resets, preserving
//!   file metadata where the platform allows
//! - Provide the elevated fallback: the same copy through `sudo cp -p`
//!
//! ## Dependency rule
//! Depends on `sandman-web-app` (port traits) and `sandman-web-domain`
//! (snapshot and error types). Never leaks `tokio::fs` types upward.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use sandman_web_app::ports::{ConfigStore, ElevatedCopy};
use sandman_web_domain::config_file::ConfigSnapshot;
use sandman_web_domain::error::{CopyError, NotFoundError, SandmanError, StorageError};

/// Config store backed by the two well-known files on the hub's filesystem.
pub struct FsConfigStore {
    live_path: PathBuf,
    default_path: PathBuf,
}

impl FsConfigStore {
    /// Create a store for the given live and default config paths.
    pub fn new(live_path: impl Into<PathBuf>, default_path: impl Into<PathBuf>) -> Self {
        Self {
            live_path: live_path.into(),
            default_path: default_path.into(),
        }
    }
}

impl ConfigStore for FsConfigStore {
    async fn read(&self) -> Result<ConfigSnapshot, SandmanError> {
        let bytes = tokio::fs::read(&self.live_path)
            .await
            .map_err(|err| read_error(&self.live_path, err))?;
        let metadata = tokio::fs::metadata(&self.live_path)
            .await
            .map_err(|err| read_error(&self.live_path, err))?;
        let modified = metadata
            .modified()
            .map_err(|err| read_error(&self.live_path, err))?;

        Ok(ConfigSnapshot {
            bytes,
            modified: DateTime::<Local>::from(modified),
        })
    }

    async fn copy_defaults(&self) -> Result<(), CopyError> {
        match tokio::fs::copy(&self.default_path, &self.live_path).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(CopyError::PermissionDenied {
                    from: self.default_path.clone(),
                    to: self.live_path.clone(),
                })
            }
            Err(err) => Err(CopyError::Failed {
                from: self.default_path.clone(),
                to: self.live_path.clone(),
                source: err,
            }),
        }
    }
}

fn read_error(path: &Path, err: std::io::Error) -> SandmanError {
    if err.kind() == std::io::ErrorKind::NotFound {
        NotFoundError {
            resource: "config file",
            key: path.display().to_string(),
        }
        .into()
    } else {
        StorageError {
            path: path.to_path_buf(),
            source: err,
        }
        .into()
    }
}

/// Elevated copy strategy: shell out to `sudo cp -p`.
///
/// `-n` keeps sudo from blocking on a password prompt when the web user has
/// no matching sudoers entry; the copy then fails like any other error.
pub struct SudoCopy {
    default_path: PathBuf,
    live_path: PathBuf,
}

impl SudoCopy {
    /// Create a strategy copying `default_path` over `live_path`.
    pub fn new(default_path: impl Into<PathBuf>, live_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
            live_path: live_path.into(),
        }
    }

    fn copy_error(&self, source: std::io::Error) -> CopyError {
        CopyError::Failed {
            from: self.default_path.clone(),
            to: self.live_path.clone(),
            source,
        }
    }
}

impl ElevatedCopy for SudoCopy {
    async fn copy_defaults(&self) -> Result<(), CopyError> {
        tracing::info!(
            from = %self.default_path.display(),
            to = %self.live_path.display(),
            "copying config defaults with elevated privileges"
        );

        let status = tokio::process::Command::new("sudo")
            .arg("-n")
            .arg("cp")
            .arg("-p")
            .arg(&self.default_path)
            .arg(&self.live_path)
            .status()
            .await
            .map_err(|err| self.copy_error(err))?;

        if status.success() {
            Ok(())
        } else {
            Err(self.copy_error(std::io::Error::other(format!(
                "sudo cp exited with {status}"
            ))))
        }
    }
}
