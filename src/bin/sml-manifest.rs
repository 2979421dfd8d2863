//! sml-manifest CLI Binary
//!
//! Generates `manifest.sml` for a published sample project.

use clap::Parser;
use sml_manifest::cli::{map_error, Cli, RunContext};
use sml_manifest::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging early
    if let Err(e) = init_logging(&context.config().logging) {
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }

    info!("sml-manifest starting");

    match context.execute() {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
