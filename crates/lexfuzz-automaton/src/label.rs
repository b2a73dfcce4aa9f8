// Transition labels and NFA state coordinates.

/// Input label on an NFA transition.
///
/// `Wildcard` matches any single concrete character. `Epsilon` is taken
/// without consuming input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Char(char),
    Wildcard,
    Epsilon,
}

impl Label {
    /// The concrete character, if this label carries one.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Label::Char(c) => Some(c),
            Label::Wildcard | Label::Epsilon => None,
        }
    }

    /// Whether this label consumes the input character `c`.
    #[inline]
    pub fn consumes(self, c: char) -> bool {
        match self {
            Label::Char(l) => l == c,
            Label::Wildcard => true,
            Label::Epsilon => false,
        }
    }
}

/// A Levenshtein NFA state: `position` characters of the term consumed
/// along some alignment, with `edits` edits spent.
///
/// Ordering is by position, then edits. Sorted vectors of states are used as
/// canonical DFA state keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NfaState {
    pub position: usize,
    pub edits: u32,
}

impl NfaState {
    #[inline]
    pub const fn new(position: usize, edits: u32) -> Self {
        Self { position, edits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_label_consumes_only_itself() {
        assert!(Label::Char('a').consumes('a'));
        assert!(!Label::Char('a').consumes('b'));
    }

    #[test]
    fn wildcard_consumes_anything() {
        assert!(Label::Wildcard.consumes('a'));
        assert!(Label::Wildcard.consumes('\0'));
        assert!(Label::Wildcard.consumes(char::MAX));
    }

    #[test]
    fn epsilon_consumes_nothing() {
        assert!(!Label::Epsilon.consumes('a'));
        assert_eq!(Label::Epsilon.as_char(), None);
    }

    #[test]
    fn state_order_is_position_then_edits() {
        let mut states = vec![NfaState::new(1, 0), NfaState::new(0, 2), NfaState::new(0, 1)];
        states.sort();
        assert_eq!(
            states,
            vec![NfaState::new(0, 1), NfaState::new(0, 2), NfaState::new(1, 0)]
        );
    }
}
