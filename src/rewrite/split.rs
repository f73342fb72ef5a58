//! Greedy sentence splitting on clause punctuation.
//!
//! Each sentence is cut into parts at commas (and, with
//! [`SplitPolicy::Punctuation`], colons). Parts are packed greedily into
//! chunks of at most `max_len` whitespace-delimited words; every chunk
//! becomes its own sentence. A part longer than `max_len` is never cut.

use super::{RewriteContext, RewriteStage};
use crate::nlp::Tokenizer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where sentences may be cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Commas (semicolons are normalized to commas first)
    #[default]
    Comma,
    /// Commas and colons
    Punctuation,
}

impl SplitPolicy {
    fn separators(&self) -> &'static [char] {
        match self {
            SplitPolicy::Comma => &[','],
            SplitPolicy::Punctuation => &[',', ':'],
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitPolicy::Comma => write!(f, "comma"),
            SplitPolicy::Punctuation => write!(f, "punctuation"),
        }
    }
}

impl FromStr for SplitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comma" => Ok(SplitPolicy::Comma),
            "punctuation" => Ok(SplitPolicy::Punctuation),
            other => Err(format!(
                "Unknown split policy '{}'. Valid: comma, punctuation",
                other
            )),
        }
    }
}

/// A clause and the separator that preceded it.
struct Part<'a> {
    separator: Option<char>,
    text: &'a str,
}

fn split_parts<'a>(sentence: &'a str, separators: &[char]) -> Vec<Part<'a>> {
    let mut parts = Vec::new();
    let mut separator = None;
    let mut start = 0;
    for (i, c) in sentence.char_indices() {
        if separators.contains(&c) {
            parts.push(Part {
                separator,
                text: sentence[start..i].trim(),
            });
            separator = Some(c);
            start = i + c.len_utf8();
        }
    }
    parts.push(Part {
        separator,
        text: sentence[start..].trim(),
    });
    parts
}

/// Re-segment `text` so sentences stay near `max_len` words.
///
/// Never fails. Every returned sentence ends in `.`, `!` or `?` and empty
/// segments are dropped.
pub fn split_long_sentences(
    text: &str,
    max_len: usize,
    policy: SplitPolicy,
    tokenizer: &dyn Tokenizer,
) -> String {
    let normalized = text.replace(';', ",");
    let doc = tokenizer.tokenize(&normalized);
    let mut segments: Vec<String> = Vec::new();

    for sentence in doc.sentence_texts() {
        let mut chunk = String::new();
        let mut chunk_words = 0;

        for part in split_parts(sentence, policy.separators()) {
            let words = part.text.split_whitespace().count();
            if words == 0 {
                continue;
            }

            if chunk_words + words > max_len {
                if !chunk.is_empty() {
                    segments.push(std::mem::take(&mut chunk));
                }
                chunk.push_str(part.text);
                chunk_words = words;
            } else {
                if !chunk.is_empty() {
                    chunk.push(part.separator.unwrap_or(','));
                    chunk.push(' ');
                }
                chunk.push_str(part.text);
                chunk_words += words;
            }
        }

        if !chunk.is_empty() {
            segments.push(chunk);
        }
    }

    segments
        .iter()
        .filter_map(|segment| finish_segment(segment))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Strip trailing separators and make sure the segment ends a sentence.
fn finish_segment(segment: &str) -> Option<String> {
    let trimmed = segment
        .trim_end_matches(|c: char| matches!(c, ',' | '.' | ';' | ' '))
        .trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with(is_terminal) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}.", trimmed))
    }
}

/// Sentence splitting stage (standard and strong modes).
#[derive(Debug, Clone, Copy)]
pub struct SplitStage {
    max_len: usize,
    policy: SplitPolicy,
}

impl SplitStage {
    pub fn new(max_len: usize, policy: SplitPolicy) -> Self {
        Self { max_len, policy }
    }
}

impl RewriteStage for SplitStage {
    fn name(&self) -> &'static str {
        "split"
    }

    fn rewrite(&self, text: &str, ctx: &RewriteContext<'_>) -> String {
        split_long_sentences(text, self.max_len, self.policy, ctx.tokenizer)
    }
}
