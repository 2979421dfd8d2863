//! Generation pipeline: collect, derive the version, render and write.

use crate::config::GeneratorConfig;
use crate::error::ManifestError;
use crate::manifest::write_manifest;
use crate::tree::collector::Collector;
use crate::tree::path::canonicalize_root;
use crate::types::Manifest;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub version: String,
    pub file_count: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} with {} file entries.",
            self.output_path.display(),
            self.file_count
        )
    }
}

/// Scan the configured root and build the manifest without writing it.
///
/// Returns the canonical root alongside the manifest.
pub fn build_manifest(config: &GeneratorConfig) -> Result<(PathBuf, Manifest), ManifestError> {
    config.validate()?;

    let root = canonicalize_root(&config.root)?;
    ensure_entry_file(&root, &config.entry)?;

    info!(root = %root.display(), entry = %config.entry, "Collecting files");

    let rules = config.exclusion_rules();
    let files = Collector::new(root.clone(), &rules).collect()?;
    let manifest = Manifest::new(config.entry.clone(), files);

    Ok((root, manifest))
}

/// Run the whole pipeline and write the manifest into the root.
///
/// Nothing is written unless every file was collected successfully.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, ManifestError> {
    let (root, manifest) = build_manifest(config)?;
    let output_path = config.output_path(&root);

    write_manifest(&output_path, &manifest)?;

    info!(
        output = %output_path.display(),
        files = manifest.files.len(),
        version = %manifest.version,
        "Manifest written"
    );

    Ok(GenerationReport {
        output_path,
        version: manifest.version,
        file_count: manifest.files.len(),
    })
}

fn ensure_entry_file(root: &Path, entry: &str) -> Result<(), ManifestError> {
    let entry_file = root.join(entry);
    match std::fs::metadata(&entry_file) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        _ => Err(ManifestError::MissingEntry(entry_file)),
    }
}
