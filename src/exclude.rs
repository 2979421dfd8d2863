//! Exclusion rules for collection.
//!
//! A file is left out of the manifest when its name equals the manifest's
//! own file name, when its exact name is listed, or when its lower-cased
//! extension is listed. Rules apply to the file name only, at any depth.
//! Temporary files left behind by an interrupted manifest write are always
//! skipped.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fmt;

/// Name prefix of the temporary file a manifest is written through.
pub const WRITE_TEMP_PREFIX: &str = ".sml-manifest-";

/// Name suffix of the temporary file a manifest is written through.
pub const WRITE_TEMP_SUFFIX: &str = ".tmp";

/// Why a file was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// The file is the manifest being generated
    OutputFile,
    /// Leftover temporary file from an interrupted manifest write
    PartialWrite,
    /// Exact file name match
    Name,
    /// Extension match (case-insensitive)
    Extension,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::OutputFile => write!(f, "output file"),
            ExclusionReason::PartialWrite => write!(f, "partial manifest write"),
            ExclusionReason::Name => write!(f, "excluded name"),
            ExclusionReason::Extension => write!(f, "excluded extension"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    output_name: String,
    extensions: BTreeSet<String>,
    names: BTreeSet<String>,
}

impl ExclusionRules {
    /// Build rules. Extensions are normalized with [`normalize_extension`].
    pub fn new<E, N>(output_name: impl Into<String>, extensions: E, names: N) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            output_name: output_name.into(),
            extensions: extensions
                .into_iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Return the first rule that excludes `file_name`, if any.
    pub fn classify(&self, file_name: &OsStr) -> Option<ExclusionReason> {
        let lossy = file_name.to_string_lossy();
        let name: &str = &lossy;

        if name == self.output_name {
            return Some(ExclusionReason::OutputFile);
        }
        if name.starts_with(WRITE_TEMP_PREFIX) && name.ends_with(WRITE_TEMP_SUFFIX) {
            return Some(ExclusionReason::PartialWrite);
        }
        if self.names.contains(name) {
            return Some(ExclusionReason::Name);
        }
        match file_extension(name) {
            Some(ext) if self.extensions.contains(&ext) => Some(ExclusionReason::Extension),
            _ => None,
        }
    }

    pub fn is_excluded(&self, file_name: &OsStr) -> bool {
        self.classify(file_name).is_some()
    }
}

/// Lower-case an extension and make sure it starts with a dot.
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Lower-cased, dot-prefixed extension of a file name.
///
/// Dotfiles without a further dot (`.DS_Store`) and names ending in a dot
/// have no extension.
pub fn file_extension(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx == name.len() - 1 {
        return None;
    }
    Some(name[idx..].to_lowercase())
}
