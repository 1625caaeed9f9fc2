//! Automaton construction: trie phase plus breadth-first failure completion.
//!
//! Phase 1 walks each pattern from the root, allocating arena states for
//! missing edges and ORing the pattern's bit into the terminal state.
//! Phase 2 assigns failure links in breadth-first order and merges output
//! sets along them; a state's output then covers every pattern ending at any
//! suffix of its path, which is what lets a single left-to-right scan report
//! all overlapping occurrences.

use std::collections::VecDeque;

use super::state::{Automaton, ExactPattern, State, StateId, ROOT};

/// Build the matching machine for the exact-pattern subset.
///
/// Pattern order is significant: index `i` in `patterns` is bit `i` in the
/// output sets. Duplicate patterns get distinct indices sharing one terminal
/// state; the OR into the output set is idempotent.
pub(crate) fn build(patterns: Vec<String>) -> Automaton {
    let mut builder = Builder::new();
    for (index, pattern) in patterns.iter().enumerate() {
        builder.insert(pattern, index);
    }
    builder.finish(patterns)
}

struct Builder {
    states: Vec<State>,
}

impl Builder {
    fn new() -> Self {
        Self {
            states: vec![State::default()],
        }
    }

    fn alloc(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(State::default());
        id
    }

    fn edge(&self, state: StateId, byte: u8) -> Option<StateId> {
        let edges = &self.states[state as usize].edges;
        edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|pos| edges[pos].1)
    }

    /// Find or create the child for the given byte.
    fn edge_or_create(&mut self, state: StateId, byte: u8) -> StateId {
        match self.states[state as usize]
            .edges
            .binary_search_by_key(&byte, |&(b, _)| b)
        {
            Ok(pos) => self.states[state as usize].edges[pos].1,
            Err(pos) => {
                let next = self.alloc();
                self.states[state as usize].edges.insert(pos, (byte, next));
                next
            }
        }
    }

    /// Trie phase: walk/create the path for one pattern and mark its
    /// terminal state. A pattern with characters outside the alphabet gets
    /// an index but no path; it can never occur in a scan.
    fn insert(&mut self, pattern: &str, index: usize) {
        if !pattern.is_ascii() {
            return;
        }
        let mut state = ROOT;
        for byte in pattern.bytes() {
            state = self.edge_or_create(state, byte);
        }
        self.states[state as usize].out.insert(index);
    }

    /// Failure phase, breadth-first from the root's children.
    fn finish(mut self, patterns: Vec<String>) -> Automaton {
        let mut queue: VecDeque<StateId> = VecDeque::new();

        // Depth-1 states fail to the root.
        let root_edges = self.states[ROOT as usize].edges.clone();
        for (_, child) in root_edges {
            self.states[child as usize].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(state) = queue.pop_front() {
            let edges = self.states[state as usize].edges.clone();
            for (byte, next) in edges {
                // Deepest proper-suffix state with an edge on this byte; the
                // root is the fixed point.
                let mut fallback = self.states[state as usize].fail;
                let target = loop {
                    if let Some(t) = self.edge(fallback, byte) {
                        break t;
                    }
                    if fallback == ROOT {
                        break ROOT;
                    }
                    fallback = self.states[fallback as usize].fail;
                };
                self.states[next as usize].fail = target;

                // Inherit every pattern recognized at the shorter matched
                // suffix. BFS order guarantees the target's set is final.
                let inherited = self.states[target as usize].out.clone();
                self.states[next as usize].out.union_with(&inherited);
                queue.push_back(next);
            }
        }

        Automaton {
            states: self.states,
            patterns: patterns.into_iter().map(ExactPattern::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_from(patterns: &[&str]) -> Automaton {
        build(patterns.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_empty_pattern_set() {
        let automaton = build_from(&[]);
        assert_eq!(automaton.states.len(), 1);
        assert!(automaton.output(ROOT).is_empty());
    }

    #[test]
    fn test_state_count_matches_trie_paths() {
        // "he" adds 2 states, "she" adds 3 (no shared prefix with "he"),
        // plus the root.
        let automaton = build_from(&["he", "she"]);
        assert_eq!(automaton.states.len(), 6);
    }

    #[test]
    fn test_shared_prefix_reuses_states() {
        // "hers" extends the "he" path by 2 states.
        let automaton = build_from(&["he", "hers"]);
        assert_eq!(automaton.states.len(), 5);
    }

    #[test]
    fn test_prefix_pattern_keeps_own_output() {
        let automaton = build_from(&["he", "hers"]);
        let h = automaton.edge(ROOT, b'h').unwrap();
        let he = automaton.edge(h, b'e').unwrap();
        assert!(automaton.output(he).contains(0));
        assert!(!automaton.output(he).contains(1));
    }

    #[test]
    fn test_duplicate_patterns_share_terminal_state() {
        let automaton = build_from(&["he", "he"]);
        let h = automaton.edge(ROOT, b'h').unwrap();
        let he = automaton.edge(h, b'e').unwrap();
        assert!(automaton.output(he).contains(0));
        assert!(automaton.output(he).contains(1));
        assert_eq!(automaton.states.len(), 3);
    }

    #[test]
    fn test_failure_links_point_to_longest_suffix() {
        let automaton = build_from(&["he", "she"]);
        let s = automaton.edge(ROOT, b's').unwrap();
        let sh = automaton.edge(s, b'h').unwrap();
        let she = automaton.edge(sh, b'e').unwrap();
        let h = automaton.edge(ROOT, b'h').unwrap();
        let he = automaton.edge(h, b'e').unwrap();

        // "sh" falls back to "h", "she" to "he".
        assert_eq!(automaton.fail(sh), h);
        assert_eq!(automaton.fail(she), he);
        // "she"'s output inherits "he" via the failure chain.
        assert!(automaton.output(she).contains(0));
        assert!(automaton.output(she).contains(1));
    }

    #[test]
    fn test_non_ascii_pattern_gets_no_path() {
        let automaton = build_from(&["héllo", "he"]);
        // Only "he" contributes trie states.
        assert_eq!(automaton.states.len(), 3);
        assert_eq!(automaton.patterns.len(), 2);
    }
}
