//! Run command: process every configured target.

use crate::commands::print_report;
use anyhow::{Context, Result};
use sphinx_embed_core::{process_config, Config};
use std::path::{Path, PathBuf};

/// Load the configuration (or the built-in default) and process its targets
pub fn run_targets(config_path: &Path, root: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let mut config = if config_path.exists() {
        tracing::info!("Loading config from {:?}", config_path);
        Config::from_file(config_path).context("Failed to load configuration")?
    } else {
        tracing::debug!("No config at {:?}; using defaults", config_path);
        Config::default()
    };

    // A root given on the command line is relative to the working directory,
    // not to the config file
    if let Some(root) = root {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        config.root = cwd.join(root);
    }

    tracing::info!(
        "Processing {} target(s) under {:?}",
        config.targets.len(),
        config.root_dir()
    );

    let report = process_config(&config, dry_run).context("Failed to process pages")?;
    print_report(&report);
    Ok(())
}
