//! Simplify command handler

use anyhow::{Context, Result};
use std::path::Path;

use lisible::cli::SimplifyArgs;
use lisible::rewrite::SimplificationResult;

use super::{build_request, load_config, read_input};

/// Handle the simplify command.
///
/// Prints the simplified text on stdout and the rationale on stderr, or the
/// whole result as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: Option<&Path>,
    args: &SimplifyArgs,
    json: bool,
    verbose: u8,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let simplifier = config.build_simplifier()?;
    let text = read_input(file)?;

    let request = build_request(text, args, &config);
    let result = simplifier.simplify(&request);

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        println!("{}", result.simplified);
        eprintln!("{}", summary(&result, verbose > 0));
    }
    Ok(())
}

/// Rationale line, plus levels and stages when verbose.
pub(crate) fn summary(result: &SimplificationResult, verbose: bool) -> String {
    let mut out = result.strategy_explanation.clone();
    if !verbose {
        return out;
    }

    if let (Some(before), Some(after)) = (&result.analysis_original, &result.analysis_simplified) {
        out.push_str(&format!(
            "\nLevel: {} -> {}",
            before.estimated_level, after.estimated_level
        ));
    }
    if !result.stages.is_empty() {
        out.push_str(&format!("\nStages: {}", result.stages.join(" -> ")));
    }
    out
}
