//! Target level, intensity and sentence length from caller intent.

use crate::analysis::TextAnalyzer;
use crate::level::{CefrLevel, IntensityMode};

/// Mode assumed when the caller leaves it blank.
pub const DEFAULT_MODE: &str = "standard";
/// Strategy assumed when the caller leaves it blank.
pub const DEFAULT_STRATEGY: &str = "auto";

/// Target level used when neither an explicit nor an automatic target applies.
pub const FALLBACK_TARGET: CefrLevel = CefrLevel::B1;
/// Sentence length used with [`FALLBACK_TARGET`].
pub const FALLBACK_MAX_LEN: usize = 22;

/// Outcome of strategy resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStrategy {
    /// Intensity mode name, lower-cased. The fallback keeps whatever the
    /// caller asked for, so this may not name a known mode.
    pub mode: String,
    pub target: CefrLevel,
    pub max_len: usize,
    pub explanation: String,
    /// Level detected on the source text (automatic strategy only)
    pub detected: Option<CefrLevel>,
}

impl ResolvedStrategy {
    /// The intensity mode, if `mode` names one.
    pub fn intensity(&self) -> Option<IntensityMode> {
        IntensityMode::parse(&self.mode)
    }

    fn for_level(target: CefrLevel, explanation: String, detected: Option<CefrLevel>) -> Self {
        let profile = target.profile();
        Self {
            mode: profile.mode.as_str().to_string(),
            target,
            max_len: profile.max_len,
            explanation,
            detected,
        }
    }
}

/// Trimmed, lower-cased `value`, or `default` when blank.
pub fn normalize(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        v => v.to_lowercase(),
    }
}

/// Decide how to rewrite `text`.
///
/// Empty `mode` means "standard", empty `strategy` means "auto" and an empty
/// target means none.
///
/// 1. `strategy == "target"` with a valid level: that level's profile.
/// 2. `strategy == "auto"`: estimate the level of `text`, step it down one
///    notch (never below A1/A2) and use that level's profile.
/// 3. Anything else: the requested mode, target B1, 22 words.
pub fn resolve_strategy(
    text: &str,
    mode: &str,
    strategy: &str,
    target: Option<&str>,
    analyzer: &TextAnalyzer,
) -> ResolvedStrategy {
    let mode = normalize(mode, DEFAULT_MODE);
    let strategy = normalize(strategy, DEFAULT_STRATEGY);
    let target = target.and_then(CefrLevel::parse);

    if strategy == "target" {
        if let Some(target) = target {
            let explanation = if target == CefrLevel::C1 {
                "Simplification vers C1 (style soutenu).".to_string()
            } else {
                format!("Simplification vers {}.", target)
            };
            tracing::debug!(%target, "explicit target");
            return ResolvedStrategy::for_level(target, explanation, None);
        }
    }

    if strategy == "auto" {
        let detected = analyzer.analyze(text).estimated_level;
        let target = detected.downgrade();
        tracing::debug!(%detected, %target, "automatic target");
        return ResolvedStrategy::for_level(
            target,
            format!(
                "Mode automatique : détecté {} -> cible {}.",
                detected, target
            ),
            Some(detected),
        );
    }

    tracing::debug!(%mode, %strategy, "no usable strategy, falling back");
    ResolvedStrategy {
        mode,
        target: FALLBACK_TARGET,
        max_len: FALLBACK_MAX_LEN,
        explanation: format!("Simplification basique (fallback {}).", FALLBACK_TARGET),
        detected: None,
    }
}
