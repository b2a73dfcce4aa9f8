//! Levenshtein automaton engine.
//!
//! This crate builds, for a query term and an edit bound `k`, a deterministic
//! automaton accepting exactly the strings within Levenshtein distance `k` of
//! the term, and walks that automaton in sorted string order.
//!
//! # Architecture
//!
//! - [`label`] -- Transition labels and NFA state coordinates
//! - [`nfa`] -- Levenshtein NFA construction and simulation
//! - [`dfa`] -- Subset construction with per-state default transitions
//! - [`oracle`] -- Smallest accepted string at or after a probe

pub mod dfa;
pub mod label;
pub mod nfa;
pub mod oracle;

pub use dfa::{Dfa, StateId};
pub use label::{Label, NfaState};
pub use nfa::LevenshteinNfa;
pub use oracle::{accepts, next_accepted_string};

/// Trait for deterministic automata over Unicode scalar values.
///
/// The oracle only needs to step one character at a time and to ask for the
/// smallest character that leaves a state, so any automaton with a sorted
/// transition list (and an optional catch-all transition) can implement it.
pub trait Automaton {
    type State: Copy;

    /// The initial state.
    fn start(&self) -> Self::State;

    /// Whether the state accepts.
    fn is_final(&self, state: Self::State) -> bool;

    /// Follow the transition for `c`, or `None` if `c` leads nowhere.
    fn transition(&self, state: Self::State, c: char) -> Option<Self::State>;

    /// Smallest character `>= c` that has a transition out of `state`.
    fn first_char_at_or_after(&self, state: Self::State, c: char) -> Option<char>;
}
