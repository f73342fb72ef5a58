//! Batch command handler

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use lisible::cli::SimplifyArgs;
use lisible::rewrite::{simplify_batch, SimplificationRequest, Simplifier};
use lisible::Config;

use super::{build_request, load_config};

/// Handle the batch command.
///
/// Prints one JSON object per input file, in input order. Unreadable files
/// get an `error` entry instead of a `result`.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    files: &[PathBuf],
    args: &SimplifyArgs,
    workers: Option<usize>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let simplifier = config.build_simplifier()?;

    let lines = run(files, args, workers, &config, &simplifier);
    let mut failed = 0;
    for line in &lines {
        if line.get("error").is_some() {
            failed += 1;
        }
        println!("{}", serde_json::to_string(line).context("Failed to serialize result")?);
    }
    if failed > 0 {
        eprintln!("{} of {} files could not be read", failed, files.len());
    }
    Ok(())
}

/// Simplify every readable file and build one JSON line per input.
pub(crate) fn run(
    files: &[PathBuf],
    args: &SimplifyArgs,
    workers: Option<usize>,
    config: &Config,
    simplifier: &Simplifier,
) -> Vec<Value> {
    let inputs: Vec<Result<String, String>> = files
        .iter()
        .map(|path| std::fs::read_to_string(path).map_err(|e| e.to_string()))
        .collect();

    let requests: Vec<SimplificationRequest> = inputs
        .iter()
        .filter_map(|input| input.as_ref().ok())
        .map(|text| build_request(text.clone(), args, config))
        .collect();

    let workers = workers.or(config.batch.workers);
    let mut results = simplify_batch(simplifier, &requests, workers).into_iter();

    files
        .iter()
        .zip(inputs)
        .map(|(path, input)| {
            let file = path.display().to_string();
            match input {
                Ok(_) => match results.next() {
                    Some(result) => json!({ "file": file, "result": result }),
                    None => json!({ "file": file, "error": "missing result" }),
                },
                Err(e) => {
                    tracing::warn!(file = %file, error = %e, "skipping unreadable file");
                    json!({ "file": file, "error": e })
                }
            }
        })
        .collect()
}
