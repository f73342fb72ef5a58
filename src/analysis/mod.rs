//! Reading-difficulty analysis of French text.
//!
//! [`TextAnalyzer`] is the entry point. It tokenizes through the injected
//! [`Tokenizer`], profiles word difficulty against the injected [`Lexicon`],
//! and runs the level ladder.
//!
//! # Module Structure
//!
//! - [`difficulty`] - Frequency buckets and the per-word report
//! - [`estimator`] - CEFR level ladder
//! - [`cache`] - Optional memo cache keyed on exact text

pub mod cache;
pub mod difficulty;
pub mod estimator;

pub use cache::{AnalysisCache, DEFAULT_CACHE_SIZE};
pub use difficulty::{classify_word, profile_words, Difficulty, WordDifficultyEntry};
pub use estimator::{estimate_level, LevelEstimate, TextMetrics};

use crate::level::CefrLevel;
use crate::nlp::{Lexicon, RuleTokenizer, Tokenizer, ZipfLexicon};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Full difficulty report for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub estimated_level: CefrLevel,
    #[serde(rename = "sentences")]
    pub sentence_count: usize,
    /// Non-whitespace tokens, punctuation included
    #[serde(rename = "tokens")]
    pub token_count: usize,
    pub avg_sentence_length: f64,
    /// Hard words first, then by descending count
    pub word_difficulty: Vec<WordDifficultyEntry>,
    pub level_band: [CefrLevel; 2],
    pub level_band_explanation: String,
    pub explanation: String,
}

impl TextAnalysis {
    /// Report for blank input.
    pub fn empty() -> Self {
        Self {
            estimated_level: CefrLevel::A1,
            sentence_count: 0,
            token_count: 0,
            avg_sentence_length: 0.0,
            word_difficulty: Vec::new(),
            level_band: [CefrLevel::A1, CefrLevel::A2],
            level_band_explanation: "Texte vide. On considère un niveau débutant par défaut."
                .to_string(),
            explanation: "Aucune phrase à analyser.".to_string(),
        }
    }

    /// Share of word occurrences classified as hard.
    pub fn hard_ratio(&self) -> f64 {
        difficulty::hard_ratio(&self.word_difficulty)
    }

    /// Hard words, most frequent first.
    pub fn hard_words(&self) -> impl Iterator<Item = &WordDifficultyEntry> {
        self.word_difficulty
            .iter()
            .filter(|e| e.difficulty == Difficulty::Hard)
    }
}

/// Analyzer façade over a tokenizer and a lexicon.
///
/// Cheap to clone; clones share the collaborators and the cache.
#[derive(Clone)]
pub struct TextAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    lexicon: Arc<dyn Lexicon>,
    cache: Option<Arc<AnalysisCache>>,
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(
            Arc::new(RuleTokenizer::new()),
            Arc::new(ZipfLexicon::default()),
        )
    }
}

impl TextAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            tokenizer,
            lexicon,
            cache: None,
        }
    }

    /// Enable memoisation with the given capacity (0 disables it).
    pub fn with_cache(mut self, max_size: usize) -> Self {
        self.cache = (max_size > 0).then(|| Arc::new(AnalysisCache::new(max_size)));
        self
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    pub fn cache(&self) -> Option<&AnalysisCache> {
        self.cache.as_deref()
    }

    /// Analyze a text. Surrounding whitespace is ignored.
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let text = text.trim();
        if text.is_empty() {
            return TextAnalysis::empty();
        }

        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(text)) {
            tracing::trace!(chars = text.len(), "analysis cache hit");
            return hit;
        }

        let analysis = self.compute(text);
        if let Some(cache) = &self.cache {
            cache.insert(text, analysis.clone());
        }
        analysis
    }

    /// Per-word difficulty report, hardest first.
    pub fn word_difficulty(&self, text: &str) -> Vec<WordDifficultyEntry> {
        let doc = self.tokenizer.tokenize(text);
        difficulty::profile_words(&doc, self.lexicon.as_ref())
    }

    fn compute(&self, text: &str) -> TextAnalysis {
        let doc = self.tokenizer.tokenize(text);
        let sentence_count = doc.sentences.len();
        let token_count = doc.words().count();
        let avg_sentence_length = if sentence_count > 0 {
            token_count as f64 / sentence_count as f64
        } else {
            token_count as f64
        };

        let word_difficulty = difficulty::profile_words(&doc, self.lexicon.as_ref());
        let metrics = TextMetrics {
            sentences: sentence_count,
            tokens: token_count,
            avg_sentence_length,
            hard_ratio: difficulty::hard_ratio(&word_difficulty),
        };
        let estimate = estimate_level(&metrics);

        tracing::debug!(
            level = %estimate.level,
            sentences = sentence_count,
            tokens = token_count,
            hard_ratio = metrics.hard_ratio,
            "text analyzed"
        );

        TextAnalysis {
            estimated_level: estimate.level,
            sentence_count,
            token_count,
            avg_sentence_length,
            word_difficulty,
            level_band: estimate.band,
            level_band_explanation: estimate.band_explanation,
            explanation: estimate.explanation,
        }
    }
}
