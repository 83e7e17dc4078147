//! Config snapshot — what the download operation hands to the caller.
//!
//! The config file itself is an opaque byte blob; the only derived value is
//! the attachment name, synthesized from the file's modification time.

use crate::time::Timestamp;

/// Byte contents and modification time of the live config file, read in one
/// shot so the name and the bytes describe the same version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// Last-modified time, used only for naming the downloaded copy.
    pub modified: Timestamp,
}

impl ConfigSnapshot {
    /// Name for the downloaded copy: `sandman_<date>-<time>.conf`, with
    /// colons replaced by underscores so the name survives on filesystems
    /// that reject them.
    #[must_use]
    pub fn attachment_name(&self) -> String {
        let stamp = self
            .modified
            .format("%x-%X")
            .to_string()
            .replace(':', "_");
        format!("sandman_{stamp}.conf")
    }
}
