//! Bounded memo cache for text analyses.
//!
//! Keyed on the exact trimmed text. Lookups only take the read lock so
//! concurrent analyses never wait on each other for hits. When full, the
//! oldest inserted entry is evicted.

use super::TextAnalysis;
use std::collections::{HashMap, VecDeque};
use std::sync::{PoisonError, RwLock};

/// Default number of cached analyses.
pub const DEFAULT_CACHE_SIZE: usize = 256;

#[derive(Debug, Default)]
struct Entries {
    map: HashMap<String, TextAnalysis>,
    /// Insertion order (front = oldest)
    order: VecDeque<String>,
}

/// Thread-safe analysis cache.
#[derive(Debug)]
pub struct AnalysisCache {
    entries: RwLock<Entries>,
    max_size: usize,
}

impl AnalysisCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            max_size,
        }
    }

    /// Cached analysis for `text`, if any.
    pub fn get(&self, text: &str) -> Option<TextAnalysis> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.map.get(text).cloned()
    }

    /// Store an analysis, evicting the oldest entries beyond capacity.
    pub fn insert(&self, text: &str, analysis: TextAnalysis) {
        if self.max_size == 0 {
            return;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.map.contains_key(text) {
            return;
        }
        while entries.map.len() >= self.max_size {
            match entries.order.pop_front() {
                Some(oldest) => {
                    entries.map.remove(&oldest);
                }
                None => break,
            }
        }
        entries.order.push_back(text.to_string());
        entries.map.insert(text.to_string(), analysis);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
