//! Tokenizer and lexicon interfaces consumed by the analyzer and rewrite stages.
//!
//! The difficulty engine never tokenizes or scores words itself. It talks to
//! two narrow capabilities:
//!
//! - [`Tokenizer`] - splits text into sentences and tagged tokens
//! - [`Lexicon`] - returns a Zipf-style frequency score (0-7) for a word
//!
//! Both are `Send + Sync` so a single instance can serve concurrent requests.
//! The built-in implementations are [`RuleTokenizer`] and [`ZipfLexicon`]
//! (the `wordfreq` French model, optionally pinned by a [`FrequencyLexicon`]
//! table); tests use small stubs.

mod lexicon;
mod tokenizer;
mod zipf;

pub use lexicon::{FrequencyLexicon, LexiconError, FLOOR_SCORE};
pub use tokenizer::RuleTokenizer;
pub use zipf::ZipfLexicon;

use std::ops::Range;

/// Coarse part-of-speech tag (Universal Dependencies inspired).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Punctuation,
    Space,
    Other,
}

impl PartOfSpeech {
    /// Open-class tags eligible for lexical substitution.
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun | PartOfSpeech::Adjective | PartOfSpeech::Adverb | PartOfSpeech::Verb
        )
    }
}

/// A single token with its trailing whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface form as it appears in the text
    pub text: String,
    /// Byte offset of the token in the source text
    pub offset: usize,
    /// Whitespace that directly follows the token (empty or a single space)
    pub whitespace: String,
    /// Lower-cased canonical form
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Every character is alphabetic
    pub is_alpha: bool,
    /// Token consists only of whitespace
    pub is_space: bool,
}

impl Token {
    /// Surface form followed by its trailing whitespace.
    pub fn text_with_ws(&self) -> String {
        format!("{}{}", self.text, self.whitespace)
    }

    /// Byte offset one past the end of the surface form.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Sentence boundaries expressed as a token index range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Range<usize>,
}

/// Tokenized text.
#[derive(Debug, Clone, Default)]
pub struct Document {
    source: String,
    pub tokens: Vec<Token>,
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(source: &str, tokens: Vec<Token>, sentences: Vec<Sentence>) -> Self {
        Self {
            source: source.to_string(),
            tokens,
            sentences,
        }
    }

    /// Text the document was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text of a sentence, without its trailing whitespace.
    pub fn sentence_text(&self, sentence: &Sentence) -> &str {
        let tokens = &self.tokens[sentence.tokens.clone()];
        let Some(first) = tokens.iter().find(|t| !t.is_space) else {
            return "";
        };
        let last = tokens.iter().rev().find(|t| !t.is_space).unwrap_or(first);
        &self.source[first.offset..last.end()]
    }

    /// Iterate over sentence texts.
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| self.sentence_text(s))
    }

    /// Tokens that are not pure whitespace.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_space)
    }
}

/// Sentence splitter, tokenizer, lemmatizer and POS tagger.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Document;
}

/// Word frequency lookup on a 0-7 Zipf scale.
///
/// Unknown words must return a floor value (conventionally [`FLOOR_SCORE`]).
pub trait Lexicon: Send + Sync {
    fn frequency(&self, word: &str) -> f64;
}
