// Subset construction: Levenshtein NFA to DFA with default transitions.

use hashbrown::HashMap;

use crate::Automaton;
use crate::label::NfaState;
use crate::nfa::LevenshteinNfa;

/// Dense DFA state index. The start state is always `0`.
pub type StateId = u32;

/// Index of the start state.
pub const START_STATE: StateId = 0;

/// One DFA state.
#[derive(Debug, Clone, Default)]
struct DfaState {
    /// Concrete transitions, sorted by character. Labels whose target equals
    /// the default target are not stored.
    labels: Vec<(char, StateId)>,
    /// Target for every character not in `labels`.
    default: Option<StateId>,
    is_final: bool,
}

/// Deterministic automaton produced by subset construction.
///
/// Each state stands for an epsilon-closed set of NFA states. Wildcard
/// transitions become a single default transition per state, so the size of
/// the automaton does not depend on the alphabet.
///
/// Every state is live: each NFA state can reach a final state by matching
/// the rest of the term, and empty state sets are never materialized.
pub struct Dfa {
    states: Vec<DfaState>,
}

impl std::fmt::Debug for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dfa")
            .field("state_count", &self.state_count())
            .field("transition_count", &self.transition_count())
            .finish()
    }
}

/// Interns canonical NFA state sets as DFA state ids.
struct SubsetBuilder {
    ids: HashMap<Vec<NfaState>, StateId>,
    states: Vec<DfaState>,
    pending: Vec<(StateId, Vec<NfaState>)>,
}

impl SubsetBuilder {
    fn new() -> Self {
        Self {
            ids: HashMap::new(),
            states: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Return the id of `set`, allocating a new state (and queueing it for
    /// expansion) the first time the set is seen.
    fn intern(&mut self, set: Vec<NfaState>) -> StateId {
        if let Some(&id) = self.ids.get(&set) {
            return id;
        }
        let id = self.states.len() as StateId;
        self.states.push(DfaState::default());
        self.ids.insert(set.clone(), id);
        self.pending.push((id, set));
        id
    }
}

impl Dfa {
    /// Run subset construction on `nfa`, starting from the closure of its
    /// start state.
    pub fn from_nfa(nfa: &LevenshteinNfa) -> Self {
        let mut builder = SubsetBuilder::new();
        let start = builder.intern(nfa.epsilon_closure([nfa.start()]));
        debug_assert_eq!(start, START_STATE);

        while let Some((id, set)) = builder.pending.pop() {
            let mut chars: Vec<char> = set
                .iter()
                .flat_map(|&s| nfa.transitions_from(s))
                .filter_map(|(label, _)| label.as_char())
                .collect();
            chars.sort_unstable();
            chars.dedup();

            let wildcard = nfa.step_wildcard(&set);
            let default = if wildcard.is_empty() {
                None
            } else {
                Some(builder.intern(wildcard))
            };

            let mut labels = Vec::with_capacity(chars.len());
            for c in chars {
                let target = nfa.step(&set, c);
                if target.is_empty() {
                    continue;
                }
                let target = builder.intern(target);
                if Some(target) != default {
                    labels.push((c, target));
                }
            }

            let state = &mut builder.states[id as usize];
            state.labels = labels;
            state.default = default;
            state.is_final = set.iter().any(|&s| nfa.is_final(s));
        }

        Self {
            states: builder.states,
        }
    }

    /// Build the DFA for all strings within `max_edits` of `term`.
    pub fn levenshtein(term: &str, max_edits: u32) -> Self {
        Self::from_nfa(&LevenshteinNfa::build(term, max_edits))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of stored transitions, counting each default transition once.
    pub fn transition_count(&self) -> usize {
        self.states
            .iter()
            .map(|s| s.labels.len() + usize::from(s.default.is_some()))
            .sum()
    }

    /// Concrete transitions of `state`, sorted by character.
    pub fn labels(&self, state: StateId) -> &[(char, StateId)] {
        &self.states[state as usize].labels
    }

    /// Default transition target of `state`.
    pub fn default_target(&self, state: StateId) -> Option<StateId> {
        self.states[state as usize].default
    }
}

impl Automaton for Dfa {
    type State = StateId;

    #[inline]
    fn start(&self) -> StateId {
        START_STATE
    }

    #[inline]
    fn is_final(&self, state: StateId) -> bool {
        self.states[state as usize].is_final
    }

    fn transition(&self, state: StateId, c: char) -> Option<StateId> {
        let s = &self.states[state as usize];
        match s.labels.binary_search_by_key(&c, |&(l, _)| l) {
            Ok(i) => Some(s.labels[i].1),
            Err(_) => s.default,
        }
    }

    fn first_char_at_or_after(&self, state: StateId, c: char) -> Option<char> {
        let s = &self.states[state as usize];
        if s.default.is_some() {
            // Every character has a transition.
            return Some(c);
        }
        let i = s.labels.partition_point(|&(l, _)| l < c);
        s.labels.get(i).map(|&(l, _)| l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dfa: &Dfa, word: &str) -> bool {
        let mut state = dfa.start();
        for c in word.chars() {
            match dfa.transition(state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        dfa.is_final(state)
    }

    #[test]
    fn exact_dfa_is_a_chain() {
        let dfa = Dfa::levenshtein("abc", 0);
        assert_eq!(dfa.state_count(), 4);
        assert_eq!(dfa.transition_count(), 3);
        assert!(run(&dfa, "abc"));
        assert!(!run(&dfa, "ab"));
        assert!(!run(&dfa, "abd"));
    }

    #[test]
    fn empty_term_with_zero_edits_accepts_only_empty() {
        let dfa = Dfa::levenshtein("", 0);
        assert_eq!(dfa.state_count(), 1);
        assert!(dfa.is_final(dfa.start()));
        assert_eq!(dfa.transition(dfa.start(), 'a'), None);
    }

    #[test]
    fn start_state_has_default_when_edits_remain() {
        let dfa = Dfa::levenshtein("a", 1);
        assert!(dfa.default_target(dfa.start()).is_some());
        assert_eq!(dfa.labels(dfa.start()).len(), 1);
        assert_eq!(dfa.labels(dfa.start())[0].0, 'a');
    }

    #[test]
    fn default_transition_covers_unseen_characters() {
        let dfa = Dfa::levenshtein("a", 1);
        assert!(run(&dfa, "z"));
        assert!(run(&dfa, "\u{00E4}"));
        assert!(run(&dfa, "\u{1F600}"));
        assert!(!run(&dfa, "zz"));
    }

    #[test]
    fn first_char_uses_default_then_labels() {
        let dfa = Dfa::levenshtein("ab", 1);
        let start = dfa.start();
        assert_eq!(dfa.first_char_at_or_after(start, 'q'), Some('q'));

        // After an unknown character every edit is spent: {(0,1), (1,1)}
        // continues only on 'a' or 'b'.
        let after = dfa.transition(start, 'x').unwrap_or(START_STATE);
        assert_ne!(after, START_STATE);
        assert_eq!(dfa.default_target(after), None);
        assert_eq!(dfa.first_char_at_or_after(after, '\0'), Some('a'));
        assert_eq!(dfa.first_char_at_or_after(after, 'b'), Some('b'));
        assert_eq!(dfa.first_char_at_or_after(after, 'c'), None);
    }

    #[test]
    fn matches_nfa_on_sample_words() {
        let nfa = LevenshteinNfa::build("banana", 2);
        let dfa = Dfa::from_nfa(&nfa);
        for word in [
            "banana", "bapapa", "papapa", "banan", "ban", "bananas", "abanana", "nanana", "",
            "bnaana", "banaan",
        ] {
            assert_eq!(run(&dfa, word), nfa.accepts(word), "word {word:?}");
        }
    }

    #[test]
    fn labels_are_sorted() {
        let dfa = Dfa::levenshtein("zyxw", 2);
        for id in 0..dfa.state_count() as StateId {
            let labels = dfa.labels(id);
            assert!(labels.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }
}
