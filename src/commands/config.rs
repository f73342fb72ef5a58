//! Config subcommands handler

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use lisible::Config;

use super::load_config;

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(config_path)?.display());
    Ok(())
}

/// Write a default config file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool, config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;
    init_at(&path, force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Write defaults to `path`, refusing to overwrite unless `force`.
pub(crate) fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)
}
