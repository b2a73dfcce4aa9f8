// Levenshtein NFA construction and simulation.

use hashbrown::{HashMap, HashSet};

use crate::label::{Label, NfaState};

/// Nondeterministic automaton accepting every string within `max_edits`
/// Levenshtein edits of `term`.
///
/// States are `(position, edits)` pairs. From `(i, e)`:
/// - `term[i]` leads to `(i + 1, e)` (match)
/// - if `e < k`, a wildcard leads to `(i, e + 1)` (the candidate has an extra
///   character), epsilon leads to `(i + 1, e + 1)` (the candidate is missing
///   `term[i]`), and a wildcard leads to `(i + 1, e + 1)` (substitution)
///
/// Every `(n, e)` is final, and `(n, e)` has a wildcard transition to
/// `(n, e + 1)` for trailing extra characters. That is a single hop per edit
/// level, not a self-loop.
pub struct LevenshteinNfa {
    term: Vec<char>,
    max_edits: u32,
    /// Outgoing transitions per state, in insertion order.
    transitions: HashMap<NfaState, Vec<(Label, NfaState)>>,
}

impl std::fmt::Debug for LevenshteinNfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevenshteinNfa")
            .field("term", &self.term.iter().collect::<String>())
            .field("max_edits", &self.max_edits)
            .field("state_count", &self.state_count())
            .finish()
    }
}

impl LevenshteinNfa {
    /// Build the NFA for `term` with edit bound `max_edits`.
    ///
    /// Construction is total: the empty term and `max_edits == 0` are both
    /// valid, and the state count is `(n + 1) * (k + 1)`.
    pub fn build(term: &str, max_edits: u32) -> Self {
        let term: Vec<char> = term.chars().collect();
        let n = term.len();
        let k = max_edits;

        let mut transitions: HashMap<NfaState, Vec<(Label, NfaState)>> = HashMap::new();
        let mut add = |from: NfaState, label: Label, to: NfaState| {
            debug_assert!(to.edits <= k, "edit count {} exceeds bound {k}", to.edits);
            transitions.entry(from).or_default().push((label, to));
        };

        for (i, &c) in term.iter().enumerate() {
            for e in 0..=k {
                let from = NfaState::new(i, e);
                add(from, Label::Char(c), NfaState::new(i + 1, e));
                if e < k {
                    add(from, Label::Wildcard, NfaState::new(i, e + 1));
                    add(from, Label::Epsilon, NfaState::new(i + 1, e + 1));
                    add(from, Label::Wildcard, NfaState::new(i + 1, e + 1));
                }
            }
        }

        for e in 0..k {
            add(NfaState::new(n, e), Label::Wildcard, NfaState::new(n, e + 1));
        }

        Self {
            term,
            max_edits,
            transitions,
        }
    }

    /// The query term as characters.
    pub fn term(&self) -> &[char] {
        &self.term
    }

    /// The edit bound `k`.
    pub fn max_edits(&self) -> u32 {
        self.max_edits
    }

    /// Number of `(position, edits)` states.
    pub fn state_count(&self) -> usize {
        (self.term.len() + 1) * (self.max_edits as usize + 1)
    }

    #[inline]
    pub fn start(&self) -> NfaState {
        NfaState::new(0, 0)
    }

    /// Final states are exactly `(n, e)` for `e` in `0..=k`.
    #[inline]
    pub fn is_final(&self, state: NfaState) -> bool {
        state.position == self.term.len() && state.edits <= self.max_edits
    }

    /// Outgoing transitions of `state` (empty for states without any).
    pub fn transitions_from(&self, state: NfaState) -> &[(Label, NfaState)] {
        self.transitions
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Epsilon closure of `states`, returned sorted and deduplicated.
    ///
    /// The sorted form is canonical: two closures are the same state set iff
    /// their vectors are equal.
    pub fn epsilon_closure<I>(&self, states: I) -> Vec<NfaState>
    where
        I: IntoIterator<Item = NfaState>,
    {
        let mut seen: HashSet<NfaState> = HashSet::new();
        let mut stack: Vec<NfaState> = Vec::new();
        for s in states {
            if seen.insert(s) {
                stack.push(s);
            }
        }

        while let Some(s) = stack.pop() {
            for &(label, to) in self.transitions_from(s) {
                if label == Label::Epsilon && seen.insert(to) {
                    stack.push(to);
                }
            }
        }

        let mut closure: Vec<NfaState> = seen.into_iter().collect();
        closure.sort_unstable();
        closure
    }

    /// States reachable from `set` by consuming `c`, epsilon-closed.
    pub fn step(&self, set: &[NfaState], c: char) -> Vec<NfaState> {
        self.step_where(set, |label| label.consumes(c))
    }

    /// States reachable from `set` through wildcard transitions only.
    ///
    /// This is where any character that labels no concrete transition out of
    /// `set` leads.
    pub fn step_wildcard(&self, set: &[NfaState]) -> Vec<NfaState> {
        self.step_where(set, |label| label == Label::Wildcard)
    }

    fn step_where(&self, set: &[NfaState], take: impl Fn(Label) -> bool) -> Vec<NfaState> {
        let targets = set.iter().flat_map(|&s| {
            self.transitions_from(s)
                .iter()
                .filter(|(label, _)| take(*label))
                .map(|&(_, to)| to)
        });
        self.epsilon_closure(targets)
    }

    /// Simulate the NFA on `word`.
    pub fn accepts(&self, word: &str) -> bool {
        let mut current = self.epsilon_closure([self.start()]);
        for c in word.chars() {
            current = self.step(&current, c);
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|&s| self.is_final(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_count_matches_grid() {
        let nfa = LevenshteinNfa::build("abc", 2);
        assert_eq!(nfa.state_count(), 12);
        assert_eq!(nfa.term(), &['a', 'b', 'c']);
    }

    #[test]
    fn transitions_from_inner_state() {
        let nfa = LevenshteinNfa::build("ab", 1);
        let out = nfa.transitions_from(NfaState::new(0, 0));
        assert_eq!(
            out,
            &[
                (Label::Char('a'), NfaState::new(1, 0)),
                (Label::Wildcard, NfaState::new(0, 1)),
                (Label::Epsilon, NfaState::new(1, 1)),
                (Label::Wildcard, NfaState::new(1, 1)),
            ]
        );
    }

    #[test]
    fn exhausted_edits_only_match() {
        let nfa = LevenshteinNfa::build("ab", 1);
        let out = nfa.transitions_from(NfaState::new(0, 1));
        assert_eq!(out, &[(Label::Char('a'), NfaState::new(1, 1))]);
    }

    #[test]
    fn trailing_deletion_is_single_hop() {
        let nfa = LevenshteinNfa::build("a", 2);
        assert_eq!(
            nfa.transitions_from(NfaState::new(1, 0)),
            &[(Label::Wildcard, NfaState::new(1, 1))]
        );
        assert_eq!(
            nfa.transitions_from(NfaState::new(1, 1)),
            &[(Label::Wildcard, NfaState::new(1, 2))]
        );
        assert!(nfa.transitions_from(NfaState::new(1, 2)).is_empty());
    }

    #[test]
    fn final_states_are_term_end() {
        let nfa = LevenshteinNfa::build("ab", 1);
        assert!(nfa.is_final(NfaState::new(2, 0)));
        assert!(nfa.is_final(NfaState::new(2, 1)));
        assert!(!nfa.is_final(NfaState::new(1, 0)));
    }

    #[test]
    fn closure_follows_epsilon_chain() {
        let nfa = LevenshteinNfa::build("abc", 2);
        let closure = nfa.epsilon_closure([nfa.start()]);
        assert_eq!(
            closure,
            vec![NfaState::new(0, 0), NfaState::new(1, 1), NfaState::new(2, 2)]
        );
    }

    #[test]
    fn empty_term_accepts_short_words() {
        let nfa = LevenshteinNfa::build("", 2);
        assert!(nfa.accepts(""));
        assert!(nfa.accepts("x"));
        assert!(nfa.accepts("xy"));
        assert!(!nfa.accepts("xyz"));
    }

    #[test]
    fn zero_edits_is_exact() {
        let nfa = LevenshteinNfa::build("talo", 0);
        assert!(nfa.accepts("talo"));
        assert!(!nfa.accepts("tal"));
        assert!(!nfa.accepts("talot"));
        assert!(!nfa.accepts("salo"));
    }

    #[test]
    fn accepts_each_edit_kind() {
        let nfa = LevenshteinNfa::build("banana", 1);
        assert!(nfa.accepts("bananas"));
        assert!(nfa.accepts("banna"));
        assert!(nfa.accepts("bapana"));
        assert!(nfa.accepts("xbanana"));
        assert!(!nfa.accepts("bapapa"));
    }
}
