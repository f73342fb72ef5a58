//! Per-word difficulty buckets and the sorted difficulty report.

use crate::nlp::{Document, Lexicon};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

/// Zipf score at or above which a word is easy.
pub const EASY_THRESHOLD: f64 = 4.0;
/// Zipf score at or above which a word is at least medium.
pub const MEDIUM_THRESHOLD: f64 = 3.0;

/// Frequency-derived difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Classify a Zipf frequency score.
    ///
    /// `>= 4.0` easy, `[3.0, 4.0)` medium, anything lower (including the
    /// floor score of unknown words) hard.
    pub fn from_score(score: f64) -> Self {
        if score >= EASY_THRESHOLD {
            Difficulty::Easy
        } else if score >= MEDIUM_THRESHOLD {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Sort rank, hardest first.
    fn rank(&self) -> u8 {
        match self {
            Difficulty::Hard => 0,
            Difficulty::Medium => 1,
            Difficulty::Easy => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Classify a single word against a lexicon.
pub fn classify_word(word: &str, lexicon: &dyn Lexicon) -> Difficulty {
    Difficulty::from_score(lexicon.frequency(word))
}

/// Difficulty of one distinct surface form in a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordDifficultyEntry {
    /// Surface form (case-sensitive)
    pub form: String,
    /// Lemma of the first occurrence, lower-cased
    pub lemma: String,
    /// Occurrences of this exact form
    pub count: usize,
    /// Zipf frequency score (0-7)
    #[serde(rename = "zipf")]
    pub frequency: f64,
    pub difficulty: Difficulty,
}

/// Build the difficulty report for a tokenized text.
///
/// Only alphabetic tokens are counted. Entries are sorted hard, medium, easy,
/// then by descending count; ties keep first-appearance order.
pub fn profile_words(doc: &Document, lexicon: &dyn Lexicon) -> Vec<WordDifficultyEntry> {
    let mut order: Vec<(&str, &str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in doc.tokens.iter().filter(|t| t.is_alpha) {
        match index.get(token.text.as_str()) {
            Some(&i) => order[i].2 += 1,
            None => {
                index.insert(token.text.as_str(), order.len());
                order.push((token.text.as_str(), token.lemma.as_str(), 1));
            }
        }
    }

    let mut entries: Vec<WordDifficultyEntry> = order
        .into_iter()
        .map(|(form, lemma, count)| {
            let frequency = lexicon.frequency(form);
            WordDifficultyEntry {
                form: form.to_string(),
                lemma: lemma.to_lowercase(),
                count,
                frequency,
                difficulty: Difficulty::from_score(frequency),
            }
        })
        .collect();

    entries.sort_by_key(|e| (e.difficulty.rank(), Reverse(e.count)));
    entries
}

/// Share of classified occurrences that are hard, 0 when nothing was classified.
pub fn hard_ratio(entries: &[WordDifficultyEntry]) -> f64 {
    let total: usize = entries.iter().map(|e| e.count).sum();
    if total == 0 {
        return 0.0;
    }
    let hard: usize = entries
        .iter()
        .filter(|e| e.difficulty == Difficulty::Hard)
        .map(|e| e.count)
        .sum();
    hard as f64 / total as f64
}
