//! Level-conditioned structural rewrites.
//!
//! - impersonal "il est ADJ de" becomes "C'est ... de" (B1/B2) or
//!   "C'est .... On doit" (A1/A2)
//! - simple passives with a closed set of participles collapse to
//!   "est fait par" (A1/A2)
//! - a subject repeated right after "et" is dropped (every level)

use super::{RewriteContext, RewriteStage};
use crate::level::CefrLevel;
use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};
use std::ops::Range;

/// Adjective -> intensity wording for the impersonal rewrite.
pub const ADJECTIVE_INTENSITY: [(&str, &str); 4] = [
    ("impératif", "très important"),
    ("nécessaire", "important"),
    ("essentiel", "très important"),
    ("important", "important"),
];

static IMPERSONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[Ii]l est (\w+) de\b").expect("impersonal pattern is a valid regex"));

static SIMPLE_PASSIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\best (effectué|réalisé|conduit|demandé|étudié|analysé) par\b")
        .expect("passive pattern is a valid regex")
});

static WORD_BEFORE_ET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\w+)(\s+)(et)\s+").expect("repeat pattern is a valid regex"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Subject pronouns that may be repeated on their own after "et".
const SUBJECT_PRONOUNS: [&str; 8] = ["je", "tu", "il", "elle", "on", "nous", "vous", "ils"];

const CLAUSE_BREAKS: [char; 6] = ['.', '!', '?', ';', ':', ','];

fn intensity_for(adjective: &str) -> String {
    let lower = adjective.to_lowercase();
    ADJECTIVE_INTENSITY
        .iter()
        .find(|(adj, _)| *adj == lower)
        .map(|(_, intensity)| intensity.to_string())
        .unwrap_or(lower)
}

/// Apply the structural rewrites for `target`. `None` leaves the text as is.
pub fn apply_pattern_rules(text: &str, target: Option<CefrLevel>) -> String {
    let Some(target) = target else {
        return text.to_string();
    };

    let mut out = IMPERSONAL
        .replace_all(text, |caps: &Captures| {
            let intensity = intensity_for(&caps[1]);
            match target {
                CefrLevel::B1 | CefrLevel::B2 => format!("C'est {} de", intensity),
                CefrLevel::A1 | CefrLevel::A2 => format!("C'est {}. On doit", intensity),
                CefrLevel::C1 => caps[0].to_string(),
            }
        })
        .into_owned();

    if target.is_beginner() {
        out = SIMPLE_PASSIVE.replace_all(&out, "est fait par").into_owned();
    }

    let out = collapse_repeated_word(&out);
    collapse_repeated_subject(&out)
}

/// Drop a word that appears on both sides of "et": "vite et vite " -> "vite et ".
///
/// The repeated word must be followed by the same whitespace as the first one.
fn collapse_repeated_word(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(caps) = WORD_BEFORE_ET.captures_at(text, pos) {
        let (Some(whole), Some(word), Some(gap), Some(et)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            break;
        };
        let rest = &text[whole.end()..];

        match repeated_len(rest, word.as_str(), gap.as_str()) {
            Some(len) => {
                out.push_str(&text[copied..whole.start()]);
                out.push_str(word.as_str());
                out.push_str(gap.as_str());
                out.push_str(et.as_str());
                out.push(' ');
                copied = whole.end() + len;
                pos = copied;
            }
            None => {
                // Retry from the next word; `\b` keeps matches word-aligned.
                pos = next_char_boundary(text, word.start());
            }
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Length of `word` + `gap` at the start of `rest`, comparing the word
/// case-insensitively.
fn repeated_len(rest: &str, word: &str, gap: &str) -> Option<usize> {
    let found = WORD.find(rest).filter(|m| m.start() == 0)?;
    if found.as_str().to_lowercase() != word.to_lowercase() {
        return None;
    }
    rest[found.end()..]
        .starts_with(gap)
        .then(|| found.end() + gap.len())
}

fn next_char_boundary(text: &str, from: usize) -> usize {
    text[from..]
        .chars()
        .next()
        .map(|c| from + c.len_utf8())
        .unwrap_or(text.len())
}

/// Drop a clause subject repeated after "et":
/// "Le chat court et le chat dort" -> "Le chat court et dort".
///
/// The subject is the first two or three words of the clause, or a lone
/// subject pronoun. At least one word must sit between it and "et".
fn collapse_repeated_subject(text: &str) -> String {
    let words: Vec<Match> = WORD.find_iter(text).collect();
    let mut removals: Vec<Range<usize>> = Vec::new();

    for (i, et) in words.iter().enumerate() {
        if !et.as_str().eq_ignore_ascii_case("et") {
            continue;
        }
        let start = clause_start(text, &words, i);

        for k in [3, 2, 1] {
            if start + k >= i || i + k >= words.len() {
                continue;
            }
            let subject = &words[start..start + k];
            if k == 1 && !SUBJECT_PRONOUNS.contains(&subject[0].as_str().to_lowercase().as_str()) {
                continue;
            }
            let repeat = &words[i + 1..=i + k];
            if !text[et.end()..repeat[0].start()].chars().all(char::is_whitespace) {
                continue;
            }
            let subject_text = &text[subject[0].start()..subject[k - 1].end()];
            let repeat_text = &text[repeat[0].start()..repeat[k - 1].end()];
            if subject_text.to_lowercase() != repeat_text.to_lowercase() {
                continue;
            }

            let tail = &text[repeat[k - 1].end()..];
            let trailing_ws = tail.len() - tail.trim_start().len();
            let end = repeat[k - 1].end() + trailing_ws;
            if end == text.len() {
                removals.push(et.end()..end);
            } else {
                removals.push(repeat[0].start()..end);
            }
            break;
        }
    }

    if removals.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for range in removals {
        if range.start < copied {
            continue;
        }
        out.push_str(&text[copied..range.start]);
        copied = range.end;
    }
    out.push_str(&text[copied..]);
    out
}

/// Index of the first word of the clause containing word `i`.
fn clause_start(text: &str, words: &[Match], i: usize) -> usize {
    let mut start = i;
    while start > 0 {
        let gap = &text[words[start - 1].end()..words[start].start()];
        if gap.contains(&CLAUSE_BREAKS[..]) {
            break;
        }
        start -= 1;
    }
    start
}

/// Structural rewrites. Skipped entirely without a target level.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternStage;

impl RewriteStage for PatternStage {
    fn name(&self) -> &'static str {
        "patterns"
    }

    fn rewrite(&self, text: &str, ctx: &RewriteContext<'_>) -> String {
        apply_pattern_rules(text, ctx.target)
    }
}
