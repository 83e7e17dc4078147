//! Config service — use-cases for downloading and resetting the config file.

use sandman_web_domain::error::{CopyError, ResetError, SandmanError};

use crate::ports::{ConfigStore, ElevatedCopy};

/// A config copy ready to be streamed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDownload {
    /// Synthesized attachment name.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Application service for the settings operations.
pub struct ConfigService<C, E> {
    store: C,
    elevated: E,
}

impl<C: ConfigStore, E: ElevatedCopy> ConfigService<C, E> {
    /// Create a new service backed by the given store and elevated-copy
    /// strategy.
    pub fn new(store: C, elevated: E) -> Self {
        Self { store, elevated }
    }

    /// Read the live config for download.
    ///
    /// # Errors
    ///
    /// Returns [`SandmanError::NotFound`] when the file is absent, or a
    /// storage error for any other read failure. Nothing is caught here;
    /// the HTTP layer maps both onto standard error responses.
    pub async fn download(&self) -> Result<ConfigDownload, SandmanError> {
        let snapshot = self.store.read().await?;
        let file_name = snapshot.attachment_name();
        Ok(ConfigDownload {
            file_name,
            bytes: snapshot.bytes,
        })
    }

    /// Overwrite the live config with factory defaults.
    ///
    /// Two-tier retry: a permission-class failure of the direct copy is
    /// retried once through the elevated strategy; every other failure is
    /// terminal immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError`] when the copy could not be completed. Callers
    /// surface this as a one-shot notice, not as an error response.
    pub async fn reset(&self) -> Result<(), ResetError> {
        match self.store.copy_defaults().await {
            Ok(()) => Ok(()),
            Err(CopyError::PermissionDenied { from, to }) => {
                tracing::warn!(
                    from = %from.display(),
                    to = %to.display(),
                    "direct config copy denied, retrying with elevated privileges"
                );
                self.elevated.copy_defaults().await.map_err(ResetError::from)
            }
            Err(err) => Err(err.into()),
        }
    }
}
