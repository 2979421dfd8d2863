//! CLI parse: clap types for sml-manifest. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Generate manifest.sml for published sample content
#[derive(Parser, Debug)]
#[command(name = "sml-manifest", version)]
#[command(about = "Generate manifest.sml for published sample content")]
pub struct Cli {
    /// Root folder containing published sample files [default: docs/SampleProject]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Entry SML file path relative to --root [default: UI.sml]
    #[arg(long)]
    pub entry: Option<String>,

    /// Output manifest filename, written inside --root [default: manifest.sml]
    #[arg(long)]
    pub output: Option<String>,

    /// File extension to exclude from manifest (repeatable). Defaults: .import, .cs
    #[arg(long = "exclude-ext", value_name = "EXT")]
    pub exclude_ext: Vec<String>,

    /// Exact filename to exclude from manifest (repeatable). Default: .DS_Store
    #[arg(long = "exclude-name", value_name = "NAME")]
    pub exclude_name: Vec<String>,

    /// Configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
