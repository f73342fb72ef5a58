//! Heuristic French tokenizer, lemmatizer and part-of-speech tagger.
//!
//! No statistical model is involved: input is NFC-normalized, cut on Unicode
//! word boundaries (UAX #29), elided articles and pronouns (`l'`, `qu'`,
//! `jusqu'`...) are split off,
//! lemmas come from a small irregular-form table, and tags come from
//! closed-class word lists followed by suffix rules. It is good enough to
//! drive difficulty profiling and dictionary-based substitution; swap in a
//! real tagger through the [`Tokenizer`] trait when precision matters.

use super::{Document, PartOfSpeech, Sentence, Token, Tokenizer};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Prefixes that elide their final vowel before an apostrophe.
const ELISIONS: &[&str] = &[
    "l", "d", "j", "m", "n", "s", "t", "c", "qu", "jusqu", "lorsqu", "puisqu", "quoiqu",
];

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &["m", "mme", "mlle", "mm", "dr", "pr", "me", "st", "cf", "p", "ex"];

/// Characters that may close a sentence after its terminal punctuation.
const CLOSERS: &[&str] = &["»", "\"", ")", "]", "”", "’", "'"];

static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "le", "la", "les", "l'", "un", "une", "des", "du", "au", "aux", "ce", "cet", "cette",
        "ces", "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "nos",
        "votre", "vos", "leur", "leurs", "quelque", "quelques", "chaque", "plusieurs", "aucun",
        "aucune",
    ]
    .into_iter()
    .collect()
});

static PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "je", "j'", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "m'", "te",
        "t'", "se", "s'", "lui", "y", "c'", "ça", "cela", "ceci", "qui", "que", "qu'", "quoi",
        "dont", "lequel", "laquelle", "celui", "celle", "ceux", "celles", "moi", "toi", "soi",
        "eux", "rien", "personne",
    ]
    .into_iter()
    .collect()
});

static ADPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "à", "de", "d'", "dans", "par", "pour", "sur", "sous", "avec", "sans", "chez", "vers",
        "entre", "contre", "depuis", "pendant", "avant", "après", "en", "malgré", "selon",
        "parmi", "durant", "jusqu'", "jusque", "envers",
    ]
    .into_iter()
    .collect()
});

static CONJUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "et", "ou", "mais", "donc", "or", "ni", "car", "si", "quand", "comme", "lorsque",
        "lorsqu'", "puisque", "puisqu'", "quoique", "quoiqu'", "parce",
    ]
    .into_iter()
    .collect()
});

static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "est", "sont", "suis", "es", "sommes", "êtes", "était", "étaient", "été", "être", "ai",
        "as", "a", "avons", "avez", "ont", "avait", "avaient", "avoir", "sera", "seront",
        "serait",
    ]
    .into_iter()
    .collect()
});

static ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ne", "n'", "pas", "plus", "très", "bien", "aussi", "encore", "toujours", "jamais",
        "déjà", "peu", "trop", "ici", "là", "alors", "puis", "ensuite", "souvent", "beaucoup",
        "moins", "tant", "tellement", "assez", "non", "oui", "vite", "mieux",
    ]
    .into_iter()
    .collect()
});

/// Irregular forms whose lemma is not the lower-cased surface.
static IRREGULAR_LEMMAS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("l'", "le"),
        ("la", "le"),
        ("les", "le"),
        ("d'", "de"),
        ("du", "de"),
        ("des", "un"),
        ("une", "un"),
        ("au", "à"),
        ("aux", "à"),
        ("j'", "je"),
        ("m'", "me"),
        ("t'", "te"),
        ("s'", "se"),
        ("n'", "ne"),
        ("c'", "ce"),
        ("qu'", "que"),
        ("jusqu'", "jusque"),
        ("lorsqu'", "lorsque"),
        ("puisqu'", "puisque"),
        ("quoiqu'", "quoique"),
        ("suis", "être"),
        ("es", "être"),
        ("est", "être"),
        ("sommes", "être"),
        ("êtes", "être"),
        ("sont", "être"),
        ("était", "être"),
        ("étaient", "être"),
        ("été", "être"),
        ("sera", "être"),
        ("seront", "être"),
        ("serait", "être"),
        ("ai", "avoir"),
        ("as", "avoir"),
        ("a", "avoir"),
        ("avons", "avoir"),
        ("avez", "avoir"),
        ("ont", "avoir"),
        ("avait", "avoir"),
        ("avaient", "avoir"),
        ("vais", "aller"),
        ("vas", "aller"),
        ("va", "aller"),
        ("allons", "aller"),
        ("allez", "aller"),
        ("vont", "aller"),
        ("fais", "faire"),
        ("fait", "faire"),
        ("faisons", "faire"),
        ("faites", "faire"),
        ("font", "faire"),
        ("peux", "pouvoir"),
        ("peut", "pouvoir"),
        ("pouvons", "pouvoir"),
        ("pouvez", "pouvoir"),
        ("peuvent", "pouvoir"),
        ("dois", "devoir"),
        ("doit", "devoir"),
        ("devons", "devoir"),
        ("devez", "devoir"),
        ("doivent", "devoir"),
        ("veux", "vouloir"),
        ("veut", "vouloir"),
        ("voulons", "vouloir"),
        ("voulez", "vouloir"),
        ("veulent", "vouloir"),
        ("sais", "savoir"),
        ("sait", "savoir"),
        ("faut", "falloir"),
        ("dit", "dire"),
    ]
    .into_iter()
    .collect()
});

/// Rule-based tokenizer for French text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTokenizer;

impl RuleTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, text: &str) -> Document {
        // Offsets and the document source refer to the composed text
        let composed: String = text.nfc().collect();
        let text = composed.as_str();
        let spans = split_spans(text);
        let mut tokens: Vec<Token> = Vec::with_capacity(spans.len());

        for span in spans {
            let surface = &text[span.start..span.end];
            match span.kind {
                SpanKind::Space => {
                    // A single leading space belongs to the previous token
                    let mut rest_start = span.start;
                    if let Some(prev) = tokens.last_mut() {
                        if prev.whitespace.is_empty() && !prev.is_space && surface.starts_with(' ')
                        {
                            prev.whitespace.push(' ');
                            rest_start += 1;
                        }
                    }
                    if rest_start < span.end {
                        let rest = &text[rest_start..span.end];
                        tokens.push(Token {
                            text: rest.to_string(),
                            offset: rest_start,
                            whitespace: String::new(),
                            lemma: rest.to_string(),
                            pos: PartOfSpeech::Space,
                            is_alpha: false,
                            is_space: true,
                        });
                    }
                }
                kind => {
                    let lower = normalize_apostrophe(&surface.to_lowercase());
                    let lemma = IRREGULAR_LEMMAS
                        .get(lower.as_str())
                        .map(|l| l.to_string())
                        .unwrap_or_else(|| lower.clone());
                    tokens.push(Token {
                        text: surface.to_string(),
                        offset: span.start,
                        whitespace: String::new(),
                        lemma,
                        pos: match kind {
                            SpanKind::Number => PartOfSpeech::Numeral,
                            SpanKind::Punct => PartOfSpeech::Punctuation,
                            _ => PartOfSpeech::Other,
                        },
                        is_alpha: surface.chars().all(is_letter),
                        is_space: false,
                    });
                }
            }
        }

        let sentences = segment_sentences(&tokens);
        tag_tokens(&mut tokens, &sentences);

        Document::new(text, tokens, sentences)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Word,
    Number,
    Punct,
    Space,
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    kind: SpanKind,
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '’'
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c)
}

fn normalize_apostrophe(s: &str) -> String {
    s.replace('’', "'")
}

fn classify(segment: &str) -> SpanKind {
    match segment.chars().next() {
        Some(c) if c.is_whitespace() => SpanKind::Space,
        Some(c) if c.is_alphabetic() => SpanKind::Word,
        Some(c) if c.is_numeric() => SpanKind::Number,
        _ => SpanKind::Punct,
    }
}

/// Cut the text into raw spans of words, numbers, punctuation and whitespace.
///
/// Segments follow Unicode word boundaries, then get merged back where French
/// text wants one token: hyphenated compounds, whitespace runs across line
/// breaks, ellipses written as periods and an elided word whose apostrophe
/// ends the segment.
fn split_spans(text: &str) -> Vec<Span> {
    let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let end_of = |i: usize| segments[i].0 + segments[i].1.len();
    let mut spans: Vec<Span> = Vec::new();
    let mut i = 0;

    while i < segments.len() {
        let (start, segment) = segments[i];
        let kind = classify(segment);
        let mut j = i + 1;

        match kind {
            SpanKind::Space => {
                while j < segments.len() && classify(segments[j].1) == SpanKind::Space {
                    j += 1;
                }
                spans.push(Span {
                    start,
                    end: end_of(j - 1),
                    kind,
                });
            }
            SpanKind::Word => {
                while j + 1 < segments.len()
                    && segments[j].1 == "-"
                    && classify(segments[j + 1].1) == SpanKind::Word
                {
                    j += 2;
                }
                let mut end = end_of(j - 1);
                // "l'" + digit: the apostrophe is its own segment
                if let Some(&(_, next)) = segments.get(j) {
                    let prefix = normalize_apostrophe(&text[start..end].to_lowercase());
                    if next.chars().all(is_apostrophe) && ELISIONS.contains(&prefix.as_str()) {
                        end += next.len();
                        j += 1;
                    }
                }
                split_elisions(text, start, end, &mut spans);
            }
            SpanKind::Punct if segment == "." => {
                while j < segments.len() && segments[j].1 == "." {
                    j += 1;
                }
                spans.push(Span {
                    start,
                    end: end_of(j - 1),
                    kind,
                });
            }
            _ => spans.push(Span {
                start,
                end: end_of(i),
                kind,
            }),
        }
        i = j;
    }

    spans
}

/// Split leading elided prefixes ("qu'", "l'") off a word span.
fn split_elisions(text: &str, start: usize, end: usize, spans: &mut Vec<Span>) {
    let mut cursor = start;
    loop {
        let word = &text[cursor..end];
        let Some((pos, apostrophe)) = word.char_indices().find(|(_, c)| is_apostrophe(*c)) else {
            break;
        };
        let prefix = word[..pos].to_lowercase();
        if !ELISIONS.contains(&prefix.as_str()) {
            // "aujourd'hui" and friends stay whole
            break;
        }
        let split_at = cursor + pos + apostrophe.len_utf8();
        spans.push(Span {
            start: cursor,
            end: split_at,
            kind: SpanKind::Word,
        });
        cursor = split_at;
        if cursor >= end {
            return;
        }
    }
    spans.push(Span {
        start: cursor,
        end,
        kind: SpanKind::Word,
    });
}

fn is_terminal(token: &Token) -> bool {
    matches!(token.text.as_str(), "!" | "?" | "…") || token.text.starts_with('.')
}

/// Whether `next` still belongs to the sentence that `prev` terminates.
///
/// French typography spaces guillemets, so spaced closers are accepted; plain
/// quotes only when attached, since a spaced one usually opens the next sentence.
fn closes_sentence(prev: &Token, next: &Token) -> bool {
    match next.text.as_str() {
        "»" | ")" | "]" | "”" => true,
        text if CLOSERS.contains(&text) => prev.whitespace.is_empty(),
        _ => is_terminal(next) && prev.whitespace.is_empty(),
    }
}

fn is_abbreviation_period(tokens: &[Token], index: usize) -> bool {
    if tokens[index].text != "." || index == 0 {
        return false;
    }
    let prev = &tokens[index - 1];
    prev.whitespace.is_empty()
        && prev.pos != PartOfSpeech::Space
        && ABBREVIATIONS.contains(&prev.text.to_lowercase().as_str())
}

/// Group tokens into sentences.
///
/// A sentence ends after terminal punctuation (plus any closing quotes or
/// brackets) or at a blank-line paragraph break.
fn segment_sentences(tokens: &[Token]) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    let has_words = |range: std::ops::Range<usize>| tokens[range].iter().any(|t| !t.is_space);

    while i < tokens.len() {
        let token = &tokens[i];
        let paragraph_break = token.is_space && token.text.matches('\n').count() >= 2;

        if paragraph_break {
            if has_words(start..i) {
                sentences.push(Sentence { tokens: start..i + 1 });
                start = i + 1;
            }
            i += 1;
            continue;
        }

        if is_terminal(token) && !is_abbreviation_period(tokens, i) {
            let mut end = i + 1;
            while end < tokens.len() && closes_sentence(&tokens[end - 1], &tokens[end]) {
                end += 1;
            }
            sentences.push(Sentence { tokens: start..end });
            start = end;
            i = end;
            continue;
        }

        i += 1;
    }

    if start < tokens.len() {
        if has_words(start..tokens.len()) {
            sentences.push(Sentence {
                tokens: start..tokens.len(),
            });
        } else if let Some(last) = sentences.last_mut() {
            last.tokens.end = tokens.len();
        }
    }

    sentences
}

/// Assign part-of-speech tags using word lists, context and suffixes.
fn tag_tokens(tokens: &mut [Token], sentences: &[Sentence]) {
    let mut sentence_starts = HashSet::new();
    for sentence in sentences {
        if let Some(first) = tokens[sentence.tokens.clone()]
            .iter()
            .position(|t| !t.is_space)
        {
            sentence_starts.insert(sentence.tokens.start + first);
        }
    }

    let mut prev_pos: Option<PartOfSpeech> = None;
    for (index, token) in tokens.iter_mut().enumerate() {
        if token.is_space {
            continue;
        }
        if token.pos == PartOfSpeech::Other {
            let lower = normalize_apostrophe(&token.text.to_lowercase());
            token.pos = tag_word(
                &token.text,
                &lower,
                prev_pos,
                sentence_starts.contains(&index),
            );
        }
        prev_pos = Some(token.pos);
    }
}

fn tag_word(
    surface: &str,
    lower: &str,
    prev: Option<PartOfSpeech>,
    sentence_initial: bool,
) -> PartOfSpeech {
    if AUXILIARIES.contains(lower) {
        return PartOfSpeech::Auxiliary;
    }
    if DETERMINERS.contains(lower) && !matches!(prev, Some(PartOfSpeech::Pronoun)) {
        return PartOfSpeech::Determiner;
    }
    if PRONOUNS.contains(lower) || DETERMINERS.contains(lower) {
        return PartOfSpeech::Pronoun;
    }
    if ADPOSITIONS.contains(lower) {
        return PartOfSpeech::Adposition;
    }
    if CONJUNCTIONS.contains(lower) {
        return PartOfSpeech::Conjunction;
    }
    if ADVERBS.contains(lower) {
        return PartOfSpeech::Adverb;
    }

    let capitalized = surface.chars().next().map(char::is_uppercase).unwrap_or(false);
    if capitalized && !sentence_initial {
        return PartOfSpeech::ProperNoun;
    }

    let has_adjective_suffix = [
        "if", "ive", "ifs", "ives", "ique", "iques", "able", "ables", "ible", "ibles", "eux",
        "euse", "euses", "el", "elle", "els", "elles", "al", "ale", "ales", "aux", "ant", "ante",
        "antes", "ants",
    ]
    .iter()
    .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix));

    // Open-class word right after a determiner: noun unless it looks adjectival
    if matches!(prev, Some(PartOfSpeech::Determiner)) {
        return if has_adjective_suffix && !lower.ends_with("ant") && !lower.ends_with("ants") {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Noun
        };
    }

    let char_len = lower.chars().count();
    if char_len > 5 && lower.ends_with("ment") {
        return PartOfSpeech::Adverb;
    }
    if char_len > 3
        && ["er", "ir", "oir", "re"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return PartOfSpeech::Verb;
    }
    if char_len > 4
        && ["ons", "ez", "aient", "ait", "ent"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return PartOfSpeech::Verb;
    }
    if ["é", "ée", "és", "ées"].iter().any(|suffix| lower.ends_with(suffix)) && char_len > 3 {
        return if matches!(prev, Some(PartOfSpeech::Auxiliary)) {
            PartOfSpeech::Verb
        } else {
            PartOfSpeech::Adjective
        };
    }
    if has_adjective_suffix {
        return PartOfSpeech::Adjective;
    }

    PartOfSpeech::Noun
}
