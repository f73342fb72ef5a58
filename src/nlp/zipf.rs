//! Word frequencies from the `wordfreq` French model.
//!
//! Scores come from [`WordFreq::zipf_frequency`] over the large French list
//! shipped by `wordfreq-model`, so every inflected form the corpus has seen
//! gets a real score. A [`FrequencyLexicon`] can be layered on top to pin
//! individual words.

use super::lexicon::clamp_score;
use super::{FrequencyLexicon, Lexicon, LexiconError};
use once_cell::sync::Lazy;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;
use wordfreq::WordFreq;
use wordfreq_model::{load_wordfreq, ModelKind};

/// The French model, decoded once per process and shared by every lexicon.
static FRENCH_MODEL: Lazy<Result<Arc<WordFreq>, String>> = Lazy::new(|| {
    let started = std::time::Instant::now();
    let model = load_wordfreq(ModelKind::LargeFr)
        .map(Arc::new)
        .map_err(|e| e.to_string());
    tracing::debug!(
        ok = model.is_ok(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded wordfreq model"
    );
    model
});

/// Zipf lexicon over `wordfreq`, with optional per-word overrides.
///
/// Cheap to clone; clones share the decoded model.
#[derive(Clone)]
pub struct ZipfLexicon {
    model: Arc<WordFreq>,
    overrides: FrequencyLexicon,
}

impl std::fmt::Debug for ZipfLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipfLexicon")
            .field("overrides", &self.overrides.len())
            .finish_non_exhaustive()
    }
}

impl Default for ZipfLexicon {
    fn default() -> Self {
        match Self::french() {
            Ok(lexicon) => lexicon,
            Err(e) => panic!("{}. This indicates a build failure.", e),
        }
    }
}

impl ZipfLexicon {
    /// Lexicon over the large French model, without overrides.
    pub fn french() -> Result<Self, LexiconError> {
        match &*FRENCH_MODEL {
            Ok(model) => Ok(Self {
                model: Arc::clone(model),
                overrides: FrequencyLexicon::default(),
            }),
            Err(reason) => Err(LexiconError::Model(reason.clone())),
        }
    }

    /// Pin the scores of the words in `overrides`; other words still come
    /// from the model.
    pub fn with_overrides(mut self, overrides: FrequencyLexicon) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn overrides(&self) -> &FrequencyLexicon {
        &self.overrides
    }
}

impl Lexicon for ZipfLexicon {
    fn frequency(&self, word: &str) -> f64 {
        let key = lookup_key(word);
        if let Some(score) = self.overrides.get(&key) {
            return score;
        }
        clamp_score(f64::from(self.model.zipf_frequency(&key)))
    }
}

/// Composed, lower-cased form with a straight apostrophe.
fn lookup_key(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase().replace('’', "'")
}
