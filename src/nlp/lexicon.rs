//! Table-backed word frequency lexicon.
//!
//! Scores follow the Zipf scale used by `wordfreq`: `log10(occurrences per
//! billion words)`, roughly 0 (unseen) to 7 (the most common function words).
//! Lookups are case-insensitive. On its own the table serves small stubs; in
//! production it holds the user overrides layered over [`super::ZipfLexicon`].

use super::Lexicon;
use std::collections::HashMap;
use std::fs;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// Score returned for words absent from the table.
pub const FLOOR_SCORE: f64 = 0.0;

const MAX_SCORE: f64 = 7.0;

/// Errors while loading a frequency table.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read frequency table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid frequency entry on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Failed to load the wordfreq model: {0}")]
    Model(String),
}

/// In-memory word -> Zipf score table.
#[derive(Debug, Clone, Default)]
pub struct FrequencyLexicon {
    scores: HashMap<String, f64>,
}

impl FrequencyLexicon {
    /// Build a lexicon from `(word, score)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let scores = pairs
            .into_iter()
            .map(|(word, score)| (word.as_ref().to_lowercase(), clamp_score(score)))
            .collect();
        Self { scores }
    }

    /// Load a table from a file.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let file = fs::File::open(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file)).map_err(|e| match e {
            LexiconError::Io { source, .. } => LexiconError::Io {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Load a table from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut scores = HashMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LexiconError::Io {
                path: "<reader>".to_string(),
                source,
            })?;
            if let Some((word, score)) = parse_line(&line, index + 1)? {
                scores.insert(word, score);
            }
        }
        Ok(Self { scores })
    }

    /// Parse a table held in memory.
    pub fn parse_str(contents: &str) -> Result<Self, LexiconError> {
        let mut scores = HashMap::new();
        for (index, line) in contents.lines().enumerate() {
            if let Some((word, score)) = parse_line(line, index + 1)? {
                scores.insert(word, score);
            }
        }
        Ok(Self { scores })
    }

    /// Score of `word` if the table has it.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(&word.to_lowercase()).copied()
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Lexicon for FrequencyLexicon {
    fn frequency(&self, word: &str) -> f64 {
        self.get(word).unwrap_or(FLOOR_SCORE)
    }
}

/// Parse one `word<TAB>score` line. Blank lines and `#` comments yield `None`.
fn parse_line(line: &str, line_no: usize) -> Result<Option<(String, f64)>, LexiconError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.split(|c: char| c == '\t' || c == ' ').filter(|f| !f.is_empty());
    let word = fields.next().ok_or_else(|| LexiconError::Parse {
        line: line_no,
        reason: "missing word".to_string(),
    })?;
    let raw_score = fields.next().ok_or_else(|| LexiconError::Parse {
        line: line_no,
        reason: format!("missing score for '{}'", word),
    })?;
    let score: f64 = raw_score.parse().map_err(|_| LexiconError::Parse {
        line: line_no,
        reason: format!("'{}' is not a number", raw_score),
    })?;
    if !score.is_finite() {
        return Err(LexiconError::Parse {
            line: line_no,
            reason: format!("'{}' is not a finite score", raw_score),
        });
    }

    Ok(Some((word.to_lowercase(), clamp_score(score))))
}

pub(super) fn clamp_score(score: f64) -> f64 {
    score.clamp(FLOOR_SCORE, MAX_SCORE)
}
