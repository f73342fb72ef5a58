//! lisible Library
//!
//! Estimates the CEFR reading level (A1 to C1) of French texts and rewrites
//! them to a simpler register with an ordered chain of rules or an LLM.

pub mod analysis;
pub mod backend;
pub mod cli;
pub mod config;
pub mod level;
pub mod nlp;
pub mod rewrite;

pub use analysis::{TextAnalysis, TextAnalyzer};
pub use config::Config;
pub use level::{CefrLevel, IntensityMode};
pub use rewrite::{Engine, SimplificationRequest, SimplificationResult, Simplifier};
