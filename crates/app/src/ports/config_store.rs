//! Config store port — access to the live and default config files.

use std::future::Future;

use sandman_web_domain::config_file::ConfigSnapshot;
use sandman_web_domain::error::{CopyError, SandmanError};

/// Access to the live config file and the unprivileged defaults copy.
pub trait ConfigStore {
    /// Read the live config's bytes and modification time in one shot.
    ///
    /// Returns [`SandmanError::NotFound`] when the file is absent.
    fn read(&self) -> impl Future<Output = Result<ConfigSnapshot, SandmanError>> + Send;

    /// Copy the default config over the live config with the caller's own
    /// privileges, preserving file metadata where the platform allows.
    fn copy_defaults(&self) -> impl Future<Output = Result<(), CopyError>> + Send;
}

/// Privileged fallback for the defaults copy, used only after
/// [`ConfigStore::copy_defaults`] signalled a permission-class failure.
pub trait ElevatedCopy {
    /// Re-run the defaults copy with elevated privileges.
    fn copy_defaults(&self) -> impl Future<Output = Result<(), CopyError>> + Send;
}

impl<T: ConfigStore + Send + Sync> ConfigStore for std::sync::Arc<T> {
    fn read(&self) -> impl Future<Output = Result<ConfigSnapshot, SandmanError>> + Send {
        (**self).read()
    }

    fn copy_defaults(&self) -> impl Future<Output = Result<(), CopyError>> + Send {
        (**self).copy_defaults()
    }
}

impl<T: ElevatedCopy + Send + Sync> ElevatedCopy for std::sync::Arc<T> {
    fn copy_defaults(&self) -> impl Future<Output = Result<(), CopyError>> + Send {
        (**self).copy_defaults()
    }
}
