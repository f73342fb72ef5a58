//! CEFR level estimation from sentence length and vocabulary rarity.
//!
//! The ladder is evaluated top-down and the first tier that matches wins.
//! Within a tier either signal alone (hard-word ratio or average sentence
//! length) is enough to escalate.

use crate::level::CefrLevel;

/// Aggregate counts the estimator works from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub sentences: usize,
    /// Non-whitespace tokens
    pub tokens: usize,
    /// Tokens per sentence
    pub avg_sentence_length: f64,
    /// Hard occurrences over classified occurrences
    pub hard_ratio: f64,
}

/// Result of the ladder: level, confidence band and both rationales.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelEstimate {
    pub level: CefrLevel,
    pub band: [CefrLevel; 2],
    pub band_explanation: String,
    pub explanation: String,
}

struct Tier {
    ratio_above: f64,
    length_above: f64,
    level: CefrLevel,
    band: [CefrLevel; 2],
    text: &'static str,
}

const TIERS: [Tier; 4] = [
    Tier {
        ratio_above: 0.18,
        length_above: 24.0,
        level: CefrLevel::C1,
        band: [CefrLevel::B2, CefrLevel::C1],
        text: "Beaucoup de mots rares ou de phrases longues : texte très exigeant.",
    },
    Tier {
        ratio_above: 0.12,
        length_above: 20.0,
        level: CefrLevel::B2,
        band: [CefrLevel::B1, CefrLevel::B2],
        text: "Vocabulaire relativement riche et phrases assez longues.",
    },
    Tier {
        ratio_above: 0.07,
        length_above: 16.0,
        level: CefrLevel::B1,
        band: [CefrLevel::A2, CefrLevel::B1],
        text: "Complexité moyenne avec quelques mots moins fréquents.",
    },
    Tier {
        ratio_above: 0.03,
        length_above: 12.0,
        level: CefrLevel::A2,
        band: [CefrLevel::A1, CefrLevel::A2],
        text: "Phrases courtes, peu de mots rares, mais un peu au-dessus du niveau débutant.",
    },
];

const BEGINNER_BAND: [CefrLevel; 2] = [CefrLevel::A1, CefrLevel::A2];

/// Texts with at most this many tokens are A1 regardless of content.
const VERY_SHORT_TOKENS: usize = 5;

/// Run the estimation ladder.
pub fn estimate_level(metrics: &TextMetrics) -> LevelEstimate {
    if metrics.tokens == 0 {
        return LevelEstimate {
            level: CefrLevel::A1,
            band: BEGINNER_BAND,
            band_explanation:
                "Texte trop court pour une analyse fiable. On suppose un niveau débutant."
                    .to_string(),
            explanation: "Texte vide ou presque vide.".to_string(),
        };
    }

    let (level, band, band_text) = if metrics.tokens <= VERY_SHORT_TOKENS {
        (
            CefrLevel::A1,
            BEGINNER_BAND,
            "Texte très court avec phrases très simples et vocabulaire de base.",
        )
    } else {
        TIERS
            .iter()
            .find(|tier| {
                metrics.hard_ratio > tier.ratio_above
                    || metrics.avg_sentence_length > tier.length_above
            })
            .map(|tier| (tier.level, tier.band, tier.text))
            .unwrap_or((
                CefrLevel::A1,
                BEGINNER_BAND,
                "Phrases courtes, vocabulaire très fréquent : niveau débutant.",
            ))
    };

    LevelEstimate {
        level,
        band,
        band_explanation: band_text.to_string(),
        explanation: format!(
            "Niveau estimé {} basé sur une longueur moyenne de {:.1} mots et une proportion de mots rares d’environ {:.1} %.",
            level,
            metrics.avg_sentence_length,
            metrics.hard_ratio * 100.0
        ),
    }
}
