//! Manifest rendering and writing.
//!
//! Output layout:
//!
//! ```text
//! Manifest {
//!     version: "auto-0123456789abcdef"
//!     entry: "UI.sml"
//!
//!     Files {
//!         File { path: "icon.png" hash: "sha256:..." size: 5 }
//!     }
//! }
//! ```

use crate::error::ManifestError;
use crate::exclude::{WRITE_TEMP_PREFIX, WRITE_TEMP_SUFFIX};
use crate::tree::hasher::HASH_ALGORITHM;
use crate::types::Manifest;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Render a manifest to its text form. Values are emitted verbatim.
pub fn render_manifest(manifest: &Manifest) -> String {
    let mut lines: Vec<String> = vec![
        "Manifest {".to_string(),
        format!("    version: \"{}\"", manifest.version),
        format!("    entry: \"{}\"", manifest.entry),
        String::new(),
        "    Files {".to_string(),
    ];

    for file in &manifest.files {
        lines.push(format!(
            "        File {{ path: \"{}\" hash: \"{}:{}\" size: {} }}",
            file.path, HASH_ALGORITHM, file.hash, file.size
        ));
    }

    lines.push("    }".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Write the rendered manifest to `path`, replacing any existing file.
///
/// Content goes to a temporary file in the same directory first and is then
/// renamed over the target, so an existing manifest is never left truncated.
/// An existing manifest keeps its permissions; a new one gets the process
/// default (`0o666` minus the umask on unix). The temporary file name is one
/// the collector skips, so a leftover from a killed run is never published.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    let rendered = render_manifest(manifest);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing_permissions = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(ManifestError::io(path, e)),
    };

    let mut builder = Builder::new();
    builder.prefix(WRITE_TEMP_PREFIX).suffix(WRITE_TEMP_SUFFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder
        .tempfile_in(dir)
        .map_err(|e| ManifestError::io(dir, e))?;
    if let Some(permissions) = existing_permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| ManifestError::io(temp.path(), e))?;
    }
    temp.write_all(rendered.as_bytes())
        .map_err(|e| ManifestError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| ManifestError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| ManifestError::io(path, e.error))?;

    Ok(())
}
