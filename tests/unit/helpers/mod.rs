//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use lisible::analysis::TextAnalyzer;
use lisible::nlp::{Document, FrequencyLexicon, Lexicon, RuleTokenizer, Tokenizer, ZipfLexicon};
use lisible::rewrite::Simplifier;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Tokenizer that finds nothing, whatever the input.
pub struct SilentTokenizer;

impl Tokenizer for SilentTokenizer {
    fn tokenize(&self, text: &str) -> Document {
        Document::new(text, Vec::new(), Vec::new())
    }
}

/// Lexicon giving every word the same score.
pub struct FlatLexicon(pub f64);

impl Lexicon for FlatLexicon {
    fn frequency(&self, _word: &str) -> f64 {
        self.0
    }
}

/// The wordfreq lexicon with the fixture scores pinned on top.
pub fn pinned_lexicon() -> ZipfLexicon {
    let overrides = FrequencyLexicon::from_path(&fixtures_dir().join("frequencies.tsv"))
        .expect("Failed to load pinned frequencies");
    ZipfLexicon::default().with_overrides(overrides)
}

/// Analyzer whose estimates on the fixture texts do not move with the model.
pub fn pinned_analyzer() -> TextAnalyzer {
    TextAnalyzer::new(Arc::new(RuleTokenizer::new()), Arc::new(pinned_lexicon()))
}

pub fn pinned_simplifier() -> Simplifier {
    Simplifier::new(pinned_analyzer())
}

/// Analyzer over the rule tokenizer and a small explicit table.
pub fn analyzer_with(pairs: &[(&str, f64)]) -> TextAnalyzer {
    let lexicon = FrequencyLexicon::from_pairs(pairs.iter().copied());
    TextAnalyzer::new(Arc::new(RuleTokenizer::new()), Arc::new(lexicon))
}
