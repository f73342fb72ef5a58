//! Rule-based rewrite pipeline.
//!
//! Each stage is a pure text-to-text function wrapped in a [`RewriteStage`]
//! so stages can be chained. Order matters: wording edits run before
//! sentence splitting so length accounting sees the simplified text, and
//! register elevation runs last so splitting cannot undo it.
//!
//! # Example
//!
//! ```
//! use lisible::level::CefrLevel;
//! use lisible::nlp::{RuleTokenizer, ZipfLexicon};
//! use lisible::rewrite::{ConnectorStage, PatternStage, RewriteChain, RewriteContext};
//!
//! let tokenizer = RuleTokenizer::new();
//! let lexicon = ZipfLexicon::default();
//! let ctx = RewriteContext::new(Some(CefrLevel::B1), &tokenizer, &lexicon);
//!
//! let chain = RewriteChain::new().with(ConnectorStage).with(PatternStage);
//! let out = chain.apply("Cependant, il est nécessaire de partir.", &ctx);
//! assert_eq!(out, "Mais, C'est important de partir.");
//! ```

pub mod batch;
mod connectors;
mod elevate;
mod lexical;
mod patterns;
mod phrasal;
pub mod prompt;
pub mod service;
mod split;
pub mod strategy;

pub use batch::simplify_batch;
pub use connectors::{simplify_connectors, ConnectorStage, EASY_CONNECTORS};
pub use elevate::{elevate_register, ElevationStage};
pub use lexical::{apply_lexical_rules, LexicalStage, LEXICAL_SUBSTITUTIONS, MAX_SUBSTITUTION_SCORE};
pub use patterns::{apply_pattern_rules, PatternStage, ADJECTIVE_INTENSITY};
pub use phrasal::{apply_phrasal_rules, PhrasalStage, PHRASAL_SUBSTITUTIONS};
pub use service::{Engine, SimplificationRequest, SimplificationResult, Simplifier};
pub use split::{split_long_sentences, SplitPolicy, SplitStage};
pub use strategy::{resolve_strategy, ResolvedStrategy};

use crate::level::CefrLevel;
use crate::nlp::{Lexicon, Tokenizer};

/// What a stage may consult while rewriting.
#[derive(Clone, Copy)]
pub struct RewriteContext<'a> {
    /// Level being targeted; `None` turns level-gated stages into no-ops
    pub target: Option<CefrLevel>,
    pub tokenizer: &'a dyn Tokenizer,
    pub lexicon: &'a dyn Lexicon,
}

impl<'a> RewriteContext<'a> {
    pub fn new(
        target: Option<CefrLevel>,
        tokenizer: &'a dyn Tokenizer,
        lexicon: &'a dyn Lexicon,
    ) -> Self {
        Self {
            target,
            tokenizer,
            lexicon,
        }
    }
}

/// A single text transformation.
///
/// Stages are infallible. Input they cannot handle passes through unchanged.
pub trait RewriteStage: Send + Sync {
    /// Short identifier reported in results and logs.
    fn name(&self) -> &'static str;

    fn rewrite(&self, text: &str, ctx: &RewriteContext<'_>) -> String;
}

/// Ordered list of stages applied in sequence.
#[derive(Default)]
pub struct RewriteChain {
    stages: Vec<Box<dyn RewriteStage>>,
}

impl RewriteChain {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage. Returns self for chaining.
    pub fn with<S: RewriteStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage sequence for a resolved strategy.
    ///
    /// Connectors, patterns and phrases always run. Lexical substitution is
    /// added in strong mode, splitting in standard and strong mode, and
    /// register elevation when targeting C1.
    pub fn for_strategy(resolved: &ResolvedStrategy, policy: SplitPolicy) -> Self {
        let mode = resolved.intensity();
        let mut chain = Self::new()
            .with(ConnectorStage)
            .with(PatternStage)
            .with(PhrasalStage);

        if mode.is_some_and(|m| m.substitutes_words()) {
            chain = chain.with(LexicalStage);
        }
        if mode.is_some_and(|m| m.splits_sentences()) {
            chain = chain.with(SplitStage::new(resolved.max_len, policy));
        }
        if resolved.target == CefrLevel::C1 {
            chain = chain.with(ElevationStage);
        }
        chain
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in order.
    pub fn apply(&self, text: &str, ctx: &RewriteContext<'_>) -> String {
        let mut current = text.to_string();
        for stage in &self.stages {
            let next = stage.rewrite(&current, ctx);
            if next != current {
                tracing::trace!(stage = stage.name(), "stage rewrote text");
            }
            current = next;
        }
        current
    }
}

impl std::fmt::Debug for RewriteChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

/// Upper-case the first character and lower-case the rest.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub(crate) fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}
