//! Analyze command handler

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use lisible::analysis::TextAnalysis;

use super::{load_config, read_input};

/// Handle the analyze command.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>, json: bool, words: usize, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let analyzer = config.build_analyzer()?;
    let text = read_input(file)?;
    let analysis = analyzer.analyze(&text);

    if json {
        let out =
            serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?;
        println!("{}", out);
    } else {
        print!("{}", format_report(&analysis, words));
    }
    Ok(())
}

/// Human-readable report listing at most `words` hard words.
pub(crate) fn format_report(analysis: &TextAnalysis, words: usize) -> String {
    let mut out = String::new();
    let [low, high] = analysis.level_band;
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "Level:       {} (band {}-{})",
        analysis.estimated_level, low, high
    );
    let _ = writeln!(out, "Sentences:   {}", analysis.sentence_count);
    let _ = writeln!(out, "Tokens:      {}", analysis.token_count);
    let _ = writeln!(out, "Avg length:  {:.1} words", analysis.avg_sentence_length);
    let _ = writeln!(out, "Rare words:  {:.1} %", analysis.hard_ratio() * 100.0);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", analysis.level_band_explanation);
    let _ = writeln!(out, "{}", analysis.explanation);

    let hard: Vec<_> = analysis.hard_words().take(words).collect();
    if !hard.is_empty() {
        let width = hard.iter().map(|w| w.form.chars().count()).max().unwrap_or(0);
        let _ = writeln!(out);
        let _ = writeln!(out, "Hardest words:");
        for entry in hard {
            let _ = writeln!(
                out,
                "  {:<width$}  x{:<3} zipf {:.2}  ({})",
                entry.form,
                entry.count,
                entry.frequency,
                entry.lemma,
                width = width
            );
        }
    }
    out
}
