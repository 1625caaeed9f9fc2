//! Pattern classification and normalization.
//!
//! Raw patterns are lowercased, validated, deduplicated and split into the
//! exact subset (fed to the automaton builder; order fixes output-set bit
//! indices) and the wildcard-bearing subset (compiled to templates).

use rustc_hash::FxHashSet;

use crate::wildcard::{Template, WILDCARD};
use crate::WordspotError;

/// The two partitions produced by classification.
#[derive(Debug, Default)]
pub(crate) struct PatternSet {
    pub(crate) exact: Vec<String>,
    pub(crate) wildcard: Vec<Template>,
}

/// Lowercase, validate and partition raw patterns.
///
/// A pattern is wildcard-bearing iff it contains at least one `*` (it may
/// contain several). Patterns that are literally identical after
/// normalization collapse to one; original ordering within each partition is
/// preserved.
pub(crate) fn classify<I, P>(patterns: I) -> Result<PatternSet, WordspotError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let mut set = PatternSet::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for pattern in patterns {
        let normalized: String = pattern
            .as_ref()
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if normalized.is_empty() {
            return Err(WordspotError::InvalidPattern("empty pattern".to_string()));
        }
        if !seen.insert(normalized.clone()) {
            continue;
        }
        if normalized.contains(WILDCARD) {
            set.wildcard.push(Template::parse(&normalized));
        } else {
            set.exact.push(normalized);
        }
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions_by_wildcard_presence() {
        let set = classify(["hers", "h*s", "p**t", "pet"]).unwrap();
        assert_eq!(set.exact, vec!["hers", "pet"]);
        assert_eq!(set.wildcard.len(), 2);
    }

    #[test]
    fn test_patterns_are_lowercased() {
        let set = classify(["CAN", "S*NAKES"]).unwrap();
        assert_eq!(set.exact, vec!["can"]);
        assert_eq!(set.wildcard.len(), 1);
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let err = classify(["he", ""]).unwrap_err();
        assert!(matches!(err, WordspotError::InvalidPattern(_)));
    }

    #[test]
    fn test_identical_normalized_patterns_collapse() {
        let set = classify(["The", "the", "THE", "h*s", "H*S"]).unwrap();
        assert_eq!(set.exact, vec!["the"]);
        assert_eq!(set.wildcard.len(), 1);
    }

    #[test]
    fn test_order_is_preserved_per_partition() {
        let set = classify(["b", "a*", "a", "b*"]).unwrap();
        assert_eq!(set.exact, vec!["b", "a"]);
        assert_eq!(set.wildcard[0].len(), 2);
        assert_eq!(set.wildcard.len(), 2);
    }
}
