//! Init command implementation.

use anyhow::{Context, Result};
use sphinx_embed_core::config::DEFAULT_CONFIG_FILE;
use sphinx_embed_core::Config;
use std::fs;
use std::path::Path;

/// Write the default configuration file
pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    let config_path = root.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists at {:?}\nUse --force to overwrite",
            DEFAULT_CONFIG_FILE,
            config_path
        );
    }

    let yaml = Config::default()
        .to_yaml()
        .context("Failed to serialize default configuration")?;
    fs::write(&config_path, yaml).with_context(|| format!("Failed to write {:?}", config_path))?;

    println!("Created {:?}", config_path);
    println!("  - Edit {} to point `root` at the Sphinx output", DEFAULT_CONFIG_FILE);
    println!("  - Run `sphinx-embed run` to rewrite the pages");
    Ok(())
}
