//! Collection: walk the tree and hash every included file.

use crate::error::ManifestError;
use crate::exclude::ExclusionRules;
use crate::tree::hasher;
use crate::tree::walker::Walker;
use crate::types::FileEntry;
use std::path::PathBuf;
use tracing::debug;

/// Collects [`FileEntry`] records under a root.
pub struct Collector<'a> {
    root: PathBuf,
    rules: &'a ExclusionRules,
}

impl<'a> Collector<'a> {
    /// `root` must already be canonicalized (see [`crate::tree::path::canonicalize_root`]).
    pub fn new(root: PathBuf, rules: &'a ExclusionRules) -> Self {
        Self { root, rules }
    }

    /// Produce entries in the walker's path order. Stops at the first error.
    pub fn collect(&self) -> Result<Vec<FileEntry>, ManifestError> {
        let walked = Walker::new(self.root.clone(), self.rules).walk()?;
        let mut entries = Vec::with_capacity(walked.len());

        for file in walked {
            let digest = hasher::hash_file(&file.path)?;
            if digest.bytes_read != file.size {
                return Err(ManifestError::SizeMismatch {
                    path: file.path,
                    expected: file.size,
                    actual: digest.bytes_read,
                });
            }

            debug!(path = %file.relative, size = file.size, hash = %digest.hex, "Collected file");

            entries.push(FileEntry {
                path: file.relative,
                hash: digest.hex,
                size: file.size,
            });
        }

        Ok(entries)
    }
}

/// Convenience wrapper around [`Collector`].
pub fn collect_entries(
    root: PathBuf,
    rules: &ExclusionRules,
) -> Result<Vec<FileEntry>, ManifestError> {
    Collector::new(root, rules).collect()
}
