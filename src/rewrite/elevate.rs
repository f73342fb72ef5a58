//! Register elevation for C1 targets.

use super::{RewriteContext, RewriteStage};
use crate::level::CefrLevel;

/// Plain phrasing -> more formal phrasing, written with a straight apostrophe.
const ELEVATIONS: &[(&str, &str)] = &[
    ("Je vais à l'école", "Je me rends à l'école"),
    ("je vais à l'école", "je me rends à l'école"),
    ("Je vais à l'ecole", "Je me rends à l'ecole"),
    ("je vais à l'ecole", "je me rends à l'ecole"),
];

const APOSTROPHES: [char; 2] = ['\'', '’'];

/// Apply literal elevations, once per apostrophe style.
pub fn elevate_register(text: &str) -> String {
    let mut out = text.to_string();
    for (plain, formal) in ELEVATIONS {
        for apostrophe in APOSTROPHES {
            let from = plain.replace('\'', &apostrophe.to_string());
            if out.contains(&from) {
                let to = formal.replace('\'', &apostrophe.to_string());
                out = out.replace(&from, &to);
            }
        }
    }
    out
}

/// Elevation stage. Only rewrites when the target is C1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElevationStage;

impl RewriteStage for ElevationStage {
    fn name(&self) -> &'static str {
        "elevate"
    }

    fn rewrite(&self, text: &str, ctx: &RewriteContext<'_>) -> String {
        if ctx.target == Some(CefrLevel::C1) {
            elevate_register(text)
        } else {
            text.to_string()
        }
    }
}
