//! Path canonicalization and normalization utilities

use crate::error::ManifestError;
use std::path::{Component, Path, PathBuf};

/// Canonicalize the scan root and make sure it is a directory.
///
/// Uses `dunce` so Windows roots stay in their plain (non-UNC) form.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, ManifestError> {
    let canonical =
        dunce::canonicalize(root).map_err(|_| ManifestError::InvalidRoot(root.to_path_buf()))?;
    if !canonical.is_dir() {
        return Err(ManifestError::InvalidRoot(canonical));
    }
    Ok(canonical)
}

/// Express `path` relative to `root` with `/` separators.
///
/// Components that are not valid UTF-8 are rejected: the manifest is a UTF-8
/// document and the version digest is defined over UTF-8 bytes.
pub fn relative_posix_path(root: &Path, path: &Path) -> Result<String, ManifestError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        ManifestError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or_else(|| {
                    ManifestError::InvalidPath(format!(
                        "{} is not valid UTF-8",
                        path.display()
                    ))
                })?;
                parts.push(name);
            }
            Component::CurDir => {}
            other => {
                return Err(ManifestError::InvalidPath(format!(
                    "unexpected component {:?} in {}",
                    other,
                    path.display()
                )))
            }
        }
    }

    if parts.is_empty() {
        return Err(ManifestError::InvalidPath(format!(
            "{} does not name a file under {}",
            path.display(),
            root.display()
        )));
    }

    Ok(parts.join("/"))
}
