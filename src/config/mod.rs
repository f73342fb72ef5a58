//! Configuration management for lisible

mod io;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::analysis::TextAnalyzer;
use crate::backend::OllamaBackend;
use crate::nlp::{FrequencyLexicon, RuleTokenizer, ZipfLexicon};
use crate::rewrite::Simplifier;

impl Config {
    /// Get the config file path (~/.config/lisible/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/lisible)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// The `wordfreq` French lexicon, with the `[lexicon]` file layered on top.
    ///
    /// An unreadable or malformed user file is an error; it is never skipped.
    pub fn load_lexicon(&self) -> Result<ZipfLexicon> {
        let lexicon = ZipfLexicon::french()?;
        let Some(path) = self.lexicon.frequency_path() else {
            return Ok(lexicon);
        };
        let overrides = FrequencyLexicon::from_path(&path)
            .with_context(|| format!("Failed to load frequency file: {:?}", path))?;
        tracing::debug!(path = %path.display(), words = overrides.len(), "loaded frequency overrides");
        Ok(lexicon.with_overrides(overrides))
    }

    /// Text analyzer using the configured lexicon and cache size.
    pub fn build_analyzer(&self) -> Result<TextAnalyzer> {
        let lexicon = self.load_lexicon()?;
        Ok(TextAnalyzer::new(Arc::new(RuleTokenizer::new()), Arc::new(lexicon))
            .with_cache(self.analysis.cache_size))
    }

    /// Simplifier wired with the configured analyzer and LLM backend.
    pub fn build_simplifier(&self) -> Result<Simplifier> {
        let backend = OllamaBackend::new(&self.llm.model)
            .with_command(&self.llm.command)
            .with_extra_args(self.llm.extra_args.clone());
        Ok(Simplifier::new(self.build_analyzer()?)
            .with_backend(Arc::new(backend))
            .with_llm_timeout(Duration::from_secs(self.llm.timeout_secs))
            .with_split_policy(self.simplify.split_policy))
    }
}
