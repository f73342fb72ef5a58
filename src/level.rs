//! CEFR levels, intensity modes and the static level profile table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CEFR level handled by the estimator and the rewrite pipeline.
///
/// C2 is deliberately absent: the estimator never goes above C1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
}

impl CefrLevel {
    /// All levels, easiest first.
    pub const ALL: [CefrLevel; 5] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
        }
    }

    /// Parse a level token, case-insensitively and ignoring surrounding whitespace.
    ///
    /// Returns `None` for anything outside A1..C1 (including "C2").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "A1" => Some(CefrLevel::A1),
            "A2" => Some(CefrLevel::A2),
            "B1" => Some(CefrLevel::B1),
            "B2" => Some(CefrLevel::B2),
            "C1" => Some(CefrLevel::C1),
            _ => None,
        }
    }

    /// Level targeted by the automatic strategy for a text detected at `self`.
    ///
    /// Steps down one notch, except at the A1/A2 floor.
    pub fn downgrade(&self) -> CefrLevel {
        match self {
            CefrLevel::C1 => CefrLevel::B2,
            CefrLevel::B2 => CefrLevel::B1,
            CefrLevel::B1 => CefrLevel::A2,
            CefrLevel::A2 => CefrLevel::A2,
            CefrLevel::A1 => CefrLevel::A1,
        }
    }

    /// Rewrite profile associated with this level.
    pub fn profile(&self) -> LevelProfile {
        match self {
            CefrLevel::A1 => LevelProfile::new(IntensityMode::Strong, 8),
            CefrLevel::A2 => LevelProfile::new(IntensityMode::Strong, 12),
            CefrLevel::B1 => LevelProfile::new(IntensityMode::Standard, 18),
            CefrLevel::B2 => LevelProfile::new(IntensityMode::Standard, 22),
            CefrLevel::C1 => LevelProfile::new(IntensityMode::Light, 30),
        }
    }

    /// True for A1 and A2.
    pub fn is_beginner(&self) -> bool {
        matches!(self, CefrLevel::A1 | CefrLevel::A2)
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CefrLevel::parse(s).ok_or_else(|| {
            format!(
                "Unknown CEFR level '{}'. Valid: A1, A2, B1, B2, C1",
                s.trim()
            )
        })
    }
}

/// How aggressively the rule engine rewrites.
///
/// - `Light`: connectors, patterns and phrases only
/// - `Standard`: adds sentence splitting
/// - `Strong`: adds lexical substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityMode {
    Light,
    Standard,
    Strong,
}

impl IntensityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityMode::Light => "light",
            IntensityMode::Standard => "standard",
            IntensityMode::Strong => "strong",
        }
    }

    /// Parse a mode name case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(IntensityMode::Light),
            "standard" => Some(IntensityMode::Standard),
            "strong" => Some(IntensityMode::Strong),
            _ => None,
        }
    }

    /// Whether sentences are re-segmented in this mode.
    pub fn splits_sentences(&self) -> bool {
        matches!(self, IntensityMode::Standard | IntensityMode::Strong)
    }

    /// Whether heavy words are substituted in this mode.
    pub fn substitutes_words(&self) -> bool {
        matches!(self, IntensityMode::Strong)
    }
}

impl fmt::Display for IntensityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal mode and maximum sentence length used when targeting a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProfile {
    pub mode: IntensityMode,
    /// Soft maximum sentence length, in whitespace-delimited words
    pub max_len: usize,
}

impl LevelProfile {
    const fn new(mode: IntensityMode, max_len: usize) -> Self {
        Self { mode, max_len }
    }
}
