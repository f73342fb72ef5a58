//! Prompt rendering for LLM rewrites.

use crate::level::CefrLevel;

/// Build the rewrite prompt for `text` at `target`.
///
/// Uses the template from `src/rewrite/prompts/simplify.txt`.
pub fn build_simplify_prompt(text: &str, target: CefrLevel) -> String {
    const TEMPLATE: &str = include_str!("prompts/simplify.txt");

    // Text goes in last so a literal "{target_level}" inside it survives
    TEMPLATE
        .trim()
        .replace("{target_level}", target.as_str())
        .replace("{text}", text.trim())
}
