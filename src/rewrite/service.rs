//! Simplifier facade.
//!
//! Entry point for simplification requests. The [`Simplifier`] resolves a
//! strategy, runs either the rule chain or an LLM backend, and reports the
//! difficulty of the text before and after.
//!
//! # Workflow
//!
//! 1. Trim the input; blank input short-circuits to a fixed result
//! 2. Resolve target level, intensity mode and sentence length
//! 3. Rewrite with the rule chain, or delegate to the LLM backend
//! 4. Analyze original and simplified text

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::{TextAnalysis, TextAnalyzer};
use crate::backend::{BackendError, RewriteBackend, DEFAULT_TIMEOUT_SECS};
use crate::level::CefrLevel;

use super::prompt::build_simplify_prompt;
use super::split::SplitPolicy;
use super::strategy::{resolve_strategy, DEFAULT_MODE, DEFAULT_STRATEGY};
use super::{RewriteChain, RewriteContext};

/// Rationale returned for blank input.
pub const EMPTY_TEXT_EXPLANATION: &str = "Empty text.";

/// Which component produces the simplified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Rules,
    Llm,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Rules => write!(f, "rules"),
            Engine::Llm => write!(f, "llm"),
        }
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rules" => Ok(Engine::Rules),
            "llm" => Ok(Engine::Llm),
            other => Err(format!("Unknown engine '{}'. Valid: rules, llm", other)),
        }
    }
}

/// Caller intent for one simplification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplificationRequest {
    pub text: String,
    /// Intensity mode; blank means "standard"
    #[serde(default)]
    pub mode: String,
    /// "auto" or "target"; blank means "auto"
    #[serde(default)]
    pub strategy: String,
    /// Explicit CEFR level, only used with the "target" strategy
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub engine: Engine,
}

impl SimplificationRequest {
    /// Request with the default mode, strategy and engine.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: DEFAULT_MODE.to_string(),
            strategy: DEFAULT_STRATEGY.to_string(),
            target: None,
            engine: Engine::Rules,
        }
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Target an explicit level. Also switches the strategy to "target".
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self.strategy = "target".to_string();
        self
    }

    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }
}

/// Outcome of one simplification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplificationResult {
    pub original: String,
    pub simplified: String,
    /// Resolved intensity mode, or "llm"
    pub mode: String,
    /// Strategy exactly as requested. Blank or mixed-case values are not
    /// normalized here; the rationale tells which branch actually ran.
    pub strategy: String,
    pub target_level: Option<CefrLevel>,
    pub max_len: usize,
    pub strategy_explanation: String,
    pub analysis_original: Option<TextAnalysis>,
    pub analysis_simplified: Option<TextAnalysis>,
    /// Rule stages that ran, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<String>,
}

impl SimplificationResult {
    /// Fixed result for blank input. Echoes the request untouched.
    fn empty(request: &SimplificationRequest) -> Self {
        Self {
            original: String::new(),
            simplified: String::new(),
            mode: request.mode.clone(),
            strategy: request.strategy.clone(),
            target_level: request.target.as_deref().and_then(CefrLevel::parse),
            max_len: 0,
            strategy_explanation: EMPTY_TEXT_EXPLANATION.to_string(),
            analysis_original: None,
            analysis_simplified: None,
            stages: Vec::new(),
        }
    }

    /// Whether the text was changed.
    pub fn changed(&self) -> bool {
        self.original != self.simplified
    }
}

/// Runs simplification requests.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct Simplifier {
    analyzer: TextAnalyzer,
    backend: Option<Arc<dyn RewriteBackend>>,
    llm_timeout: Duration,
    split_policy: SplitPolicy,
}

impl fmt::Debug for Simplifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simplifier")
            .field("analyzer", &self.analyzer)
            .field("backend", &self.backend.as_ref().map(|b| b.name()))
            .field("llm_timeout", &self.llm_timeout)
            .field("split_policy", &self.split_policy)
            .finish()
    }
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new(TextAnalyzer::default())
    }
}

impl Simplifier {
    /// Simplifier without an LLM backend. The `llm` engine then always falls
    /// back to the original text.
    pub fn new(analyzer: TextAnalyzer) -> Self {
        Self {
            analyzer,
            backend: None,
            llm_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            split_policy: SplitPolicy::default(),
        }
    }

    pub fn with_backend(mut self, backend: Arc<dyn RewriteBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_llm_timeout(mut self, timeout: Duration) -> Self {
        self.llm_timeout = timeout;
        self
    }

    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }

    /// Difficulty report for `text`.
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        self.analyzer.analyze(text)
    }

    /// Simplify one request. Never fails: backend errors degrade to the
    /// original text.
    pub fn simplify(&self, request: &SimplificationRequest) -> SimplificationResult {
        let text = request.text.trim();
        if text.is_empty() {
            return SimplificationResult::empty(request);
        }

        let resolved = resolve_strategy(
            text,
            &request.mode,
            &request.strategy,
            request.target.as_deref(),
            &self.analyzer,
        );
        tracing::debug!(
            mode = %resolved.mode,
            target = %resolved.target,
            max_len = resolved.max_len,
            engine = %request.engine,
            "resolved strategy"
        );

        match request.engine {
            Engine::Llm => {
                let simplified = match self.rewrite_with_llm(text, resolved.target) {
                    Ok(out) => out,
                    Err(e) => {
                        tracing::warn!(error = %e, "LLM simplification failed, returning original text");
                        text.to_string()
                    }
                };
                SimplificationResult {
                    original: text.to_string(),
                    analysis_original: Some(self.analyzer.analyze(text)),
                    analysis_simplified: Some(self.analyzer.analyze(&simplified)),
                    simplified,
                    mode: "llm".to_string(),
                    strategy: request.strategy.clone(),
                    target_level: Some(resolved.target),
                    max_len: resolved.max_len,
                    strategy_explanation: format!(
                        "LLM-based simplification. {}",
                        resolved.explanation
                    ),
                    stages: Vec::new(),
                }
            }
            Engine::Rules => {
                let chain = RewriteChain::for_strategy(&resolved, self.split_policy);
                let ctx = RewriteContext::new(
                    Some(resolved.target),
                    self.analyzer.tokenizer(),
                    self.analyzer.lexicon(),
                );
                let simplified = chain.apply(text, &ctx).trim().to_string();
                tracing::debug!(stages = ?chain.stage_names(), "rule chain applied");

                SimplificationResult {
                    original: text.to_string(),
                    analysis_original: Some(self.analyzer.analyze(text)),
                    analysis_simplified: Some(self.analyzer.analyze(&simplified)),
                    simplified,
                    mode: resolved.mode,
                    strategy: request.strategy.clone(),
                    target_level: Some(resolved.target),
                    max_len: resolved.max_len,
                    strategy_explanation: format!("{} (Rule-based)", resolved.explanation),
                    stages: chain.stage_names().into_iter().map(String::from).collect(),
                }
            }
        }
    }

    fn rewrite_with_llm(&self, text: &str, target: CefrLevel) -> Result<String, BackendError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| BackendError::NotAvailable("no LLM backend configured".to_string()))?;
        let prompt = build_simplify_prompt(text, target);
        tracing::debug!(backend = backend.name(), %target, "delegating to LLM");
        backend.invoke(&prompt, self.llm_timeout)
    }
}
