//! Hard logical connectors replaced by everyday equivalents.

use super::{capitalize, starts_uppercase, RewriteContext, RewriteStage};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Connector phrase and its simpler equivalent, applied in this order.
pub const EASY_CONNECTORS: [(&str, &str); 13] = [
    ("cependant", "mais"),
    ("toutefois", "mais"),
    ("néanmoins", "mais"),
    ("par conséquent", "donc"),
    ("en conséquence", "donc"),
    ("ainsi", "donc"),
    ("tandis que", "alors que"),
    ("afin que", "pour que"),
    ("afin de", "pour"),
    ("lorsque", "quand"),
    ("désormais", "maintenant"),
    ("nonobstant", "malgré"),
    ("attendu que", "parce que"),
];

static CONNECTOR_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    EASY_CONNECTORS
        .iter()
        .map(|(hard, easy)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(hard));
            let re = Regex::new(&pattern).expect("connector pattern is a valid regex");
            (re, *easy)
        })
        .collect()
});

/// Replace hard connectors, case-insensitively, keeping a leading capital.
pub fn simplify_connectors(text: &str) -> String {
    let mut out = text.to_string();
    for (re, easy) in CONNECTOR_PATTERNS.iter() {
        out = re
            .replace_all(&out, |caps: &Captures| {
                if starts_uppercase(&caps[0]) {
                    capitalize(easy)
                } else {
                    easy.to_string()
                }
            })
            .into_owned();
    }
    out
}

/// Connector substitution. Runs at every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectorStage;

impl RewriteStage for ConnectorStage {
    fn name(&self) -> &'static str {
        "connectors"
    }

    fn rewrite(&self, text: &str, _ctx: &RewriteContext<'_>) -> String {
        simplify_connectors(text)
    }
}
