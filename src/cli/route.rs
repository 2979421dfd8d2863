//! CLI route: resolves the effective configuration and runs the generator.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, GeneratorConfig};
use crate::error::ManifestError;
use crate::generator::generate;
use crate::logging::LoggingConfig;
use tracing::debug;

/// Effective configuration for one invocation.
pub struct RunContext {
    config: GeneratorConfig,
    print_config: bool,
}

impl RunContext {
    /// Load file/environment configuration and layer the CLI flags on top.
    pub fn new(cli: &Cli) -> Result<Self, ManifestError> {
        let base = ConfigLoader::load(cli.config.as_deref())?;
        Ok(Self::from_config(cli, base))
    }

    /// Layer CLI flags over an already loaded configuration.
    ///
    /// Scalar flags replace; repeated exclusion flags append to the loaded lists.
    pub fn from_config(cli: &Cli, mut config: GeneratorConfig) -> Self {
        if let Some(ref root) = cli.root {
            config.root = root.clone();
        }
        if let Some(ref entry) = cli.entry {
            config.entry = entry.clone();
        }
        if let Some(ref output) = cli.output {
            config.output = output.clone();
        }
        config.exclude_ext.extend(cli.exclude_ext.iter().cloned());
        config.exclude_name.extend(cli.exclude_name.iter().cloned());
        config.logging = build_logging_config(cli, &config.logging);

        Self {
            config,
            print_config: cli.print_config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the requested action and return the text for stdout.
    pub fn execute(&self) -> Result<String, ManifestError> {
        if self.print_config {
            return toml::to_string_pretty(&self.config).map_err(|e| {
                ManifestError::ConfigError(format!("Failed to render configuration: {}", e))
            });
        }

        debug!(config = ?self.config, "Running generator");
        let report = generate(&self.config)?;
        Ok(report.to_string())
    }
}

/// Precedence: explicit flags, then --verbose, then the loaded configuration.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
