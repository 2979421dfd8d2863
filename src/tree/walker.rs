//! Filesystem walker for traversing directory structures

use crate::error::ManifestError;
use crate::exclude::ExclusionRules;
use crate::tree::path::relative_posix_path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// A regular file that passed the exclusion rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Root-relative POSIX path
    pub relative: String,
    /// Size reported by filesystem metadata
    pub size: u64,
}

/// Filesystem walker
pub struct Walker<'a> {
    root: PathBuf,
    rules: &'a ExclusionRules,
}

impl<'a> Walker<'a> {
    /// Create a walker over an already canonicalized root
    pub fn new(root: PathBuf, rules: &'a ExclusionRules) -> Self {
        Self { root, rules }
    }

    /// Walk the tree and collect every included regular file.
    ///
    /// Symbolic links are neither followed nor listed. Directories are read
    /// in file-name order and the result is sorted by relative path.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, ManifestError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| ManifestError::Walk {
                path: e
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| self.root.clone()),
                source: e,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(reason) = self.rules.classify(entry.file_name()) {
                debug!(path = %entry.path().display(), %reason, "Excluding file");
                continue;
            }

            let path = entry.path().to_path_buf();
            let relative = relative_posix_path(&self.root, &path)?;
            let metadata = entry.metadata().map_err(|e| ManifestError::Walk {
                path: path.clone(),
                source: e,
            })?;

            files.push(WalkedFile {
                path,
                relative,
                size: metadata.len(),
            });
        }

        files.sort_by(|a, b| a.relative.as_bytes().cmp(b.relative.as_bytes()));

        Ok(files)
    }
}
