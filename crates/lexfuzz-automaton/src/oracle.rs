// Smallest accepted string at or after a probe.
//
// Depth-first search in character order over an explicit stack. Each frame
// remembers the prefix length it extends, the automaton state at that point,
// and the last character tried from there, so backtracking resumes with the
// next larger character instead of starting over.

use lexfuzz_core::character::{MIN_CHAR, successor};

use crate::Automaton;

/// One backtracking point.
#[derive(Debug, Clone, Copy)]
struct Frame<S> {
    /// Length (in chars) of the prefix this frame extends.
    depth: usize,
    /// Automaton state after that prefix.
    state: S,
    /// Character last tried at `depth`, or `None` if nothing was tried yet.
    attempted: Option<char>,
}

/// Returns the lexicographically smallest string accepted by `automaton`
/// that is `>= probe`, or `None` if no accepted string remains.
///
/// The probe is first walked forward as far as the automaton allows, leaving
/// one frame per consumed character. If the whole probe is consumed and the
/// state accepts, the probe itself is the answer. Otherwise frames are popped
/// deepest first; each tries the smallest character strictly greater than its
/// last attempt (or [`MIN_CHAR`] for a fresh frame) and then descends along
/// the smallest available characters until a final state is reached.
///
/// The automaton must be acyclic on its live part, which holds for
/// Levenshtein automata: every consumed character advances the term position
/// or spends an edit.
pub fn next_accepted_string<A: Automaton>(automaton: &A, probe: &str) -> Option<String> {
    let mut prefix: Vec<char> = probe.chars().collect();
    let mut stack: Vec<Frame<A::State>> = Vec::with_capacity(prefix.len() + 1);

    let mut state = automaton.start();
    let mut consumed_all = true;
    for (depth, &c) in prefix.iter().enumerate() {
        stack.push(Frame {
            depth,
            state,
            attempted: Some(c),
        });
        match automaton.transition(state, c) {
            Some(next) => state = next,
            None => {
                consumed_all = false;
                break;
            }
        }
    }

    if consumed_all {
        if automaton.is_final(state) {
            return Some(probe.to_string());
        }
        // Strings extending the whole probe are all greater than it.
        stack.push(Frame {
            depth: prefix.len(),
            state,
            attempted: None,
        });
    }

    while let Some(frame) = stack.pop() {
        let from = match frame.attempted {
            Some(c) => match successor(c) {
                Some(next) => next,
                None => continue,
            },
            None => MIN_CHAR,
        };
        let Some(c) = automaton.first_char_at_or_after(frame.state, from) else {
            continue;
        };
        let Some(next) = automaton.transition(frame.state, c) else {
            continue;
        };

        prefix.truncate(frame.depth);
        prefix.push(c);
        if automaton.is_final(next) {
            return Some(prefix.iter().collect());
        }

        stack.push(Frame {
            attempted: Some(c),
            ..frame
        });
        stack.push(Frame {
            depth: frame.depth + 1,
            state: next,
            attempted: None,
        });
    }

    None
}

/// Whether `automaton` accepts `word`.
pub fn accepts<A: Automaton>(automaton: &A, word: &str) -> bool {
    let mut state = automaton.start();
    for c in word.chars() {
        match automaton.transition(state, c) {
            Some(next) => state = next,
            None => return false,
        }
    }
    automaton.is_final(state)
}
