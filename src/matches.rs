//! Aggregated scan results.
//!
//! `Matches` maps each matched substring to the ordered list of its start
//! offsets, preserving discovery order per key and across keys. A
//! `(substring, offset)` pair is recorded at most once: the exact and
//! wildcard streams can surface the same literal occurrence, and two
//! wildcard templates can cover the same window.

use rustc_hash::FxHashMap;

/// Mapping from matched substring to the zero-based start offsets of its
/// occurrences, in discovery order. Produced fresh by every scan; owned by
/// the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matches {
    order: Vec<String>,
    offsets: FxHashMap<String, Vec<usize>>,
}

impl Matches {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence. An exact duplicate of an already-recorded
    /// `(substring, offset)` pair is dropped.
    pub(crate) fn add(&mut self, word: &str, offset: usize) {
        match self.offsets.get_mut(word) {
            Some(list) => {
                if !list.contains(&offset) {
                    list.push(offset);
                }
            }
            None => {
                self.order.push(word.to_string());
                self.offsets.insert(word.to_string(), vec![offset]);
            }
        }
    }

    /// Start offsets recorded for `word`, in discovery order.
    pub fn offsets(&self, word: &str) -> Option<&[usize]> {
        self.offsets.get(word).map(|list| list.as_slice())
    }

    /// Whether any occurrence of `word` was recorded.
    pub fn contains(&self, word: &str) -> bool {
        self.offsets.contains_key(word)
    }

    /// Number of distinct matched substrings.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(substring, offsets)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.order
            .iter()
            .map(move |word| (word.as_str(), self.offsets[word].as_slice()))
    }
}
