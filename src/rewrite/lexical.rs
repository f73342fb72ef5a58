//! Token-level replacement of rare "heavy" words.

use super::{capitalize, starts_uppercase, RewriteContext, RewriteStage};
use crate::level::CefrLevel;
use crate::nlp::{Lexicon, Tokenizer};

/// Words above this Zipf score are common enough to keep.
pub const MAX_SUBSTITUTION_SCORE: f64 = 3.5;

/// Heavy word (lemma or lower-cased form) -> plain replacement.
pub const LEXICAL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("dichotomie", "différence"),
    ("impératif", "très important"),
    ("souligner", "dire clairement"),
    ("circonspection", "prudence"),
    ("prétendre", "dire"),
    ("éventualité", "possibilité"),
    ("subséquent", "suivant"),
    ("tenace", "forte"),
    ("outrecuidant", "arrogant"),
    ("s'avérer", "être"),
    ("conceptuel", "abstrait"),
    // heavy verbs
    ("effectuer", "faire"),
    ("procéder", "faire"),
    ("réaliser", "faire"),
    ("conduire", "faire"),
    ("considérer", "penser"),
    ("susciter", "causer"),
    ("déceler", "trouver"),
    ("recenser", "compter"),
    ("dépourvu", "sans"),
    ("subsister", "rester"),
    ("interroger", "demander"),
    ("exiger", "demander"),
];

fn lookup(key: &str) -> Option<&'static str> {
    LEXICAL_SUBSTITUTIONS
        .iter()
        .find(|(heavy, _)| *heavy == key)
        .map(|(_, plain)| *plain)
}

fn applies_to(target: Option<CefrLevel>) -> bool {
    matches!(
        target,
        Some(CefrLevel::A1) | Some(CefrLevel::A2) | Some(CefrLevel::B1)
    )
}

/// Replace rare content words that have a plain equivalent.
///
/// Only nouns, adjectives, adverbs and verbs with a known, low frequency
/// (`0 < score <= 3.5`) are candidates. The lemma is looked up first, then
/// the lower-cased form. Whitespace between tokens is kept as is and the
/// result is trimmed.
pub fn apply_lexical_rules(
    text: &str,
    target: Option<CefrLevel>,
    tokenizer: &dyn Tokenizer,
    lexicon: &dyn Lexicon,
) -> String {
    if !applies_to(target) {
        return text.to_string();
    }

    let doc = tokenizer.tokenize(text);
    let mut out = String::with_capacity(text.len());

    for token in &doc.tokens {
        let replacement = if token.is_alpha && token.pos.is_content_word() {
            let score = lexicon.frequency(&token.text);
            if score > 0.0 && score <= MAX_SUBSTITUTION_SCORE {
                lookup(&token.lemma.to_lowercase())
                    .or_else(|| lookup(&token.text.to_lowercase()))
            } else {
                None
            }
        } else {
            None
        };

        match replacement {
            Some(plain) => {
                tracing::trace!(from = %token.text, to = plain, "lexical substitution");
                if starts_uppercase(&token.text) {
                    out.push_str(&capitalize(plain));
                } else {
                    out.push_str(plain);
                }
                out.push_str(&token.whitespace);
            }
            None => out.push_str(&token.text_with_ws()),
        }
    }

    out.trim().to_string()
}

/// Lexical substitution stage (strong mode only).
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalStage;

impl RewriteStage for LexicalStage {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn rewrite(&self, text: &str, ctx: &RewriteContext<'_>) -> String {
        apply_lexical_rules(text, ctx.target, ctx.tokenizer, ctx.lexicon)
    }
}
