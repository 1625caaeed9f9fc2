//! wordspot: multi-pattern text search with single-character wildcards
//!
//! Finds every occurrence — overlapping ones included — of a set of patterns
//! inside a text, case-insensitively. Exact patterns are matched in one pass
//! by a trie-plus-failure-links automaton; patterns containing `*` (each `*`
//! matches exactly one non-whitespace character) are matched by sliding a
//! fixed-length template across the text. Both result streams merge into a
//! single substring → offsets mapping.

mod automaton;
mod matches;
mod pattern;
mod wildcard;

use std::fmt;

pub use crate::matches::Matches;
pub use crate::wildcard::WILDCARD;

use crate::automaton::Automaton;
use crate::wildcard::Template;

/// Errors that can occur while building a scanner
#[derive(Debug)]
pub enum WordspotError {
    /// A pattern was empty after normalization.
    InvalidPattern(String),
}

impl fmt::Display for WordspotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordspotError::InvalidPattern(msg) => write!(f, "invalid pattern: {}", msg),
        }
    }
}

impl std::error::Error for WordspotError {}

/// The pattern scanner
///
/// Built once from a pattern list and immutable afterwards, so it can be
/// shared freely across threads for concurrent scans over different texts:
/// ```
/// # use wordspot::Scanner;
/// use std::sync::Arc;
///
/// let scanner = Arc::new(Scanner::new(["hers", "h*s"]).unwrap());
/// let scanner_clone = Arc::clone(&scanner);
/// // Both can now scan concurrently
/// ```
///
/// Scanning returns every occurrence of every pattern:
/// ```
/// use wordspot::Scanner;
///
/// let scanner = Scanner::new(["hers", "h*s"]).unwrap();
/// let matches = scanner.scan("ahishers");
/// assert_eq!(matches.offsets("hers"), Some(&[4][..]));
/// assert_eq!(matches.offsets("his"), Some(&[1][..]));
/// ```
#[derive(Clone, Debug)]
pub struct Scanner {
    automaton: Automaton,
    wildcards: Vec<Template>,
}

impl Scanner {
    /// Build a scanner from raw patterns.
    ///
    /// Patterns are matched case-insensitively. A pattern containing `*`
    /// matches windows where each `*` stands for exactly one non-whitespace
    /// character; all other patterns must occur literally. Patterns that are
    /// identical after lowercasing collapse to one.
    ///
    /// Fails with [`WordspotError::InvalidPattern`] if any pattern is empty;
    /// no partial scanner is returned.
    pub fn new<I, P>(patterns: I) -> Result<Self, WordspotError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let set = pattern::classify(patterns)?;
        Ok(Self {
            automaton: automaton::build(set.exact),
            wildcards: set.wildcard,
        })
    }

    /// Find every occurrence of every pattern in `text`.
    ///
    /// Returns a mapping from matched substring to the ordered list of its
    /// zero-based start offsets (character offsets). Exact matches are keyed
    /// by the normalized pattern text, wildcard matches by the literal text
    /// slice. Overlapping occurrences are all reported. Never fails; an
    /// empty mapping means no matches.
    pub fn scan(&self, text: &str) -> Matches {
        let original: Vec<char> = text.chars().collect();
        let lowered: Vec<char> = original.iter().map(|c| c.to_ascii_lowercase()).collect();

        let mut matches = Matches::new();
        automaton::scan_into(&self.automaton, &lowered, &mut matches);
        for template in &self.wildcards {
            template.scan_into(&original, &lowered, &mut matches);
        }
        matches
    }

    /// True if any pattern occurs in `text`. Stops at the first hit.
    pub fn is_match(&self, text: &str) -> bool {
        let lowered: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();
        automaton::scan_any(&self.automaton, &lowered)
            || self.wildcards.iter().any(|t| t.is_match(&lowered))
    }

    /// Number of distinct patterns the scanner was built with.
    pub fn pattern_count(&self) -> usize {
        self.exact_pattern_count() + self.wildcard_pattern_count()
    }

    /// Number of exact (wildcard-free) patterns.
    pub fn exact_pattern_count(&self) -> usize {
        self.automaton.patterns.len()
    }

    /// Number of wildcard-bearing patterns.
    pub fn wildcard_pattern_count(&self) -> usize {
        self.wildcards.len()
    }
}
