//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::DEFAULT_CACHE_SIZE;
use crate::backend::DEFAULT_TIMEOUT_SECS;
use crate::level::{CefrLevel, IntensityMode};
use crate::rewrite::batch::MAX_WORKERS;
use crate::rewrite::strategy::{DEFAULT_MODE, DEFAULT_STRATEGY};
use crate::rewrite::{Engine, SplitPolicy};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simplify: SimplifyConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Defaults for `simplify` and `batch` requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifyConfig {
    /// Intensity mode ("light", "standard", "strong")
    #[serde(default = "default_mode")]
    pub mode: String,
    /// "auto" or "target"
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Level used with the "target" strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub engine: Engine,
    #[serde(default)]
    pub split_policy: SplitPolicy,
}

pub fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

pub fn default_strategy() -> String {
    DEFAULT_STRATEGY.to_string()
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            strategy: default_strategy(),
            target: None,
            engine: Engine::default(),
            split_policy: SplitPolicy::default(),
        }
    }
}

/// LLM backend settings for the `llm` engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Executable invoked as `<command> run <model>`
    #[serde(default = "default_llm_command")]
    pub command: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Seconds before a completion is abandoned
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
    /// Extra arguments appended after the model name
    #[serde(default)]
    pub extra_args: Vec<String>,
}

pub fn default_llm_command() -> String {
    crate::backend::ollama::DEFAULT_COMMAND.to_string()
}

pub fn default_llm_model() -> String {
    crate::backend::ollama::DEFAULT_MODEL.to_string()
}

pub fn default_llm_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            command: default_llm_command(),
            model: default_llm_model(),
            timeout_secs: default_llm_timeout(),
            extra_args: Vec::new(),
        }
    }
}

/// Frequency table selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// `word<TAB>score` file pinning scores over the wordfreq model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_file: Option<String>,
}

impl LexiconConfig {
    /// Frequency file path with `~/` expanded.
    pub fn frequency_path(&self) -> Option<PathBuf> {
        self.frequency_file.as_deref().map(expand_home)
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Text analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Memoised analyses kept in memory (0 disables the cache)
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

pub fn default_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cache_size: default_cache_size(),
        }
    }
}

/// Batch settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of parallel workers (None = CPU count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if IntensityMode::parse(&self.simplify.mode).is_none() {
            return Err(format!(
                "Unknown simplify.mode '{}'. Valid: light, standard, strong",
                self.simplify.mode
            ));
        }
        let strategy = self.simplify.strategy.trim().to_lowercase();
        if strategy != "auto" && strategy != "target" {
            return Err(format!(
                "Unknown simplify.strategy '{}'. Valid: auto, target",
                self.simplify.strategy
            ));
        }
        if let Some(ref target) = self.simplify.target {
            if CefrLevel::parse(target).is_none() {
                return Err(format!(
                    "Unknown simplify.target '{}'. Valid: A1, A2, B1, B2, C1",
                    target
                ));
            }
        }
        if self.llm.command.trim().is_empty() {
            return Err("llm.command must not be empty".to_string());
        }
        if self.llm.timeout_secs == 0 {
            return Err("llm.timeout_secs must be > 0".to_string());
        }
        if self.llm.timeout_secs > 600 {
            return Err(format!(
                "llm.timeout_secs {} exceeds maximum (600s)",
                self.llm.timeout_secs
            ));
        }
        if let Some(0) = self.batch.workers {
            return Err("batch.workers must be > 0".to_string());
        }
        if let Some(w) = self.batch.workers {
            if w > MAX_WORKERS {
                return Err(format!(
                    "batch.workers {} exceeds maximum ({})",
                    w, MAX_WORKERS
                ));
            }
        }
        Ok(())
    }
}
