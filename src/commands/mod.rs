//! Command handlers for the lisible CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod analyze;
pub mod batch;
pub mod completions;
pub mod config;
pub mod simplify;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use lisible::cli::SimplifyArgs;
use lisible::rewrite::{Engine, SimplificationRequest};
use lisible::Config;

/// Load the config from `--config` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Whether `file` designates stdin.
fn is_stdin(file: Option<&Path>) -> bool {
    file.map_or(true, |p| p.as_os_str() == "-")
}

/// Read the input text from a file, or from stdin when `file` is absent or `-`.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if !is_stdin(Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Merge CLI options over the `[simplify]` config section.
///
/// An explicit `--target` without `--strategy` selects the "target" strategy.
pub fn build_request(text: String, args: &SimplifyArgs, config: &Config) -> SimplificationRequest {
    let defaults = &config.simplify;
    let strategy = match (&args.strategy, &args.target) {
        (Some(strategy), _) => strategy.clone(),
        (None, Some(_)) => "target".to_string(),
        (None, None) => defaults.strategy.clone(),
    };

    SimplificationRequest {
        text,
        mode: args.mode.clone().unwrap_or_else(|| defaults.mode.clone()),
        strategy,
        target: args.target.clone().or_else(|| defaults.target.clone()),
        engine: args.engine.map(Engine::from).unwrap_or(defaults.engine),
    }
}
