//! Core data types: file records and the manifest they roll up into.

use crate::version::derive_version;

/// One included file.
///
/// `path` is relative to the scanned root and always uses `/` separators.
/// `hash` is the bare lowercase hex SHA-256 digest of the content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    pub path: String,
    pub hash: String,
    pub size: u64,
}

/// Rendered form of a scanned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub version: String,
    pub entry: String,
    pub files: Vec<FileEntry>,
}

impl Manifest {
    /// Build a manifest, sorting files by path and deriving the version
    /// from the sorted list.
    pub fn new(entry: impl Into<String>, mut files: Vec<FileEntry>) -> Self {
        sort_entries(&mut files);
        let version = derive_version(&files);
        Self {
            version,
            entry: entry.into(),
            files,
        }
    }
}

/// Sort entries ascending by the bytes of their path.
pub fn sort_entries(files: &mut [FileEntry]) {
    files.sort_by(|a, b| a.path.as_bytes().cmp(b.path.as_bytes()));
}
