//! Single-pass text traversal over the built machine.

use crate::matches::Matches;

use super::state::{Automaton, StateId, ALPHABET_SIZE, ROOT};

/// Advance the cursor by one character. Alphabet characters step through the
/// trie with failure fallback; anything outside the alphabet has no
/// transition anywhere and lands on the root.
#[inline]
fn step(automaton: &Automaton, state: StateId, ch: char) -> StateId {
    if (ch as usize) < ALPHABET_SIZE {
        automaton.next_state(state, ch as u8)
    } else {
        ROOT
    }
}

/// Scan lowercased text and record every exact-pattern occurrence into
/// `matches`, keyed by the pattern's normalized text with start offset
/// `i - len + 1`. The cursor advances exactly once per character; failure
/// links are consulted only inside `next_state`.
pub(crate) fn scan_into(automaton: &Automaton, lowered: &[char], matches: &mut Matches) {
    let mut state = ROOT;
    for (i, &ch) in lowered.iter().enumerate() {
        state = step(automaton, state, ch);
        let out = automaton.output(state);
        if out.is_empty() {
            continue;
        }
        for index in out.iter() {
            let pattern = &automaton.patterns[index];
            matches.add(&pattern.text, i + 1 - pattern.char_len);
        }
    }
}

/// True if any exact pattern occurs in the text. Stops at the first hit.
pub(crate) fn scan_any(automaton: &Automaton, lowered: &[char]) -> bool {
    let mut state = ROOT;
    for &ch in lowered {
        state = step(automaton, state, ch);
        if !automaton.output(state).is_empty() {
            return true;
        }
    }
    false
}
