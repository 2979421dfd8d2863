//! Configuration System
//!
//! Layered configuration: built-in defaults, then an optional TOML file, then
//! `SML_MANIFEST_*` environment variables. CLI flags are applied on top by the
//! binary (see [`crate::cli`]).

use crate::error::ManifestError;
use crate::exclude::ExclusionRules;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `SML_MANIFEST_ROOT`.
pub const ENV_PREFIX: &str = "SML_MANIFEST";

/// Everything one generation run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root directory containing the published files
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Entry file, relative to `root`
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Manifest file name, written inside `root`
    #[serde(default = "default_output")]
    pub output: String,

    /// Extensions left out of the manifest (case-insensitive)
    #[serde(
        default = "default_exclude_ext",
        deserialize_with = "deserialize_string_list"
    )]
    pub exclude_ext: Vec<String>,

    /// Exact file names left out of the manifest
    #[serde(
        default = "default_exclude_name",
        deserialize_with = "deserialize_string_list"
    )]
    pub exclude_name: Vec<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from("docs/SampleProject")
}

fn default_entry() -> String {
    "UI.sml".to_string()
}

fn default_output() -> String {
    "manifest.sml".to_string()
}

fn default_exclude_ext() -> Vec<String> {
    vec![".import".to_string(), ".cs".to_string()]
}

fn default_exclude_name() -> Vec<String> {
    vec![".DS_Store".to_string()]
}

/// Accept either a list or a comma-separated string.
///
/// Environment values arrive as plain strings, e.g.
/// `SML_MANIFEST_EXCLUDE_EXT=.tmp,.bak`.
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringList {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match StringList::deserialize(deserializer)? {
        StringList::List(items) => items,
        StringList::Joined(joined) => split_list(&joined),
    })
}

fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            entry: default_entry(),
            output: default_output(),
            exclude_ext: default_exclude_ext(),
            exclude_name: default_exclude_name(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check values that would otherwise fail late or silently.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.entry.trim().is_empty() {
            return Err(ManifestError::ConfigError(
                "Entry path cannot be empty".to_string(),
            ));
        }
        if self.output_file_name().is_none() {
            return Err(ManifestError::ConfigError(format!(
                "Output must name a file: {:?}",
                self.output
            )));
        }
        Ok(())
    }

    /// Final path component of `output`; the name excluded from collection.
    pub fn output_file_name(&self) -> Option<String> {
        Path::new(&self.output)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// Where the manifest is written for a given (canonical) root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    pub fn exclusion_rules(&self) -> ExclusionRules {
        ExclusionRules::new(
            self.output_file_name().unwrap_or_default(),
            &self.exclude_ext,
            self.exclude_name.iter().cloned(),
        )
    }
}

/// Loads [`GeneratorConfig`] from file and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration. `path`, when given, must point to an existing TOML file.
    ///
    /// Environment values are kept as strings so entries such as `1.0` or
    /// `TRUE` reach the config verbatim; list keys are split on commas.
    pub fn load(path: Option<&Path>) -> Result<GeneratorConfig, ManifestError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ManifestError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: GeneratorConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load from a TOML string; used for inline configuration and tests.
    pub fn load_from_str(toml: &str) -> Result<GeneratorConfig, ManifestError> {
        let config: GeneratorConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}
