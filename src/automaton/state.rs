//! Core data model for the matching machine.
//!
//! States live in an arena `Vec` and are referenced by `StateId`. Each state
//! carries its byte-labelled trie edges (sorted, sparse), its failure link
//! and its output set. The automaton is immutable once built; any number of
//! scans may share it read-only.

use smallvec::SmallVec;

use super::output::OutputSet;

/// Index into the state arena.
pub(crate) type StateId = u32;

/// The root state. Always present, never removed.
pub(crate) const ROOT: StateId = 0;

/// Upper bound (exclusive) of the supported alphabet. Characters outside it
/// never match any transition.
pub(crate) const ALPHABET_SIZE: usize = 128;

/// An exact pattern retained by the automaton: normalized text plus its
/// precomputed character length (offset arithmetic runs once per match).
#[derive(Clone, Debug)]
pub(crate) struct ExactPattern {
    pub(crate) text: String,
    pub(crate) char_len: usize,
}

impl ExactPattern {
    pub(crate) fn new(text: String) -> Self {
        let char_len = text.chars().count();
        Self { text, char_len }
    }
}

/// A state in the automaton.
///
/// Edges are kept as (byte, target) pairs sorted by byte; most states have
/// few children.
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
    pub(crate) edges: SmallVec<[(u8, StateId); 4]>,
    pub(crate) fail: StateId,
    pub(crate) out: OutputSet,
}

/// The built matching machine: trie edges, failure links and merged output
/// sets for the exact-pattern subset, plus the pattern texts the output-set
/// bits index into.
#[derive(Clone, Debug)]
pub(crate) struct Automaton {
    pub(crate) states: Vec<State>,
    pub(crate) patterns: Vec<ExactPattern>,
}

impl Automaton {
    /// Trie edge lookup; `None` is the "no edge" sentinel.
    #[inline]
    pub(crate) fn edge(&self, state: StateId, byte: u8) -> Option<StateId> {
        let edges = &self.states[state as usize].edges;
        edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|pos| edges[pos].1)
    }

    #[inline]
    pub(crate) fn fail(&self, state: StateId) -> StateId {
        self.states[state as usize].fail
    }

    #[inline]
    pub(crate) fn output(&self, state: StateId) -> &OutputSet {
        &self.states[state as usize].out
    }

    /// Total transition function: take the trie edge when defined, otherwise
    /// follow failure links until one is found. Absent edges from the root
    /// return the root, which makes the function total for any byte.
    #[inline]
    pub(crate) fn next_state(&self, mut state: StateId, byte: u8) -> StateId {
        loop {
            if let Some(next) = self.edge(state, byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.fail(state);
        }
    }
}
