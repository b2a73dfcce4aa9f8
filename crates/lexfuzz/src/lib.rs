//! Approximate lexicon lookup.
//!
//! Given a query term and an edit bound `k`, finds every key of a sorted
//! lexicon within Levenshtein distance `k` of the term. The search alternates
//! between a Levenshtein automaton (which proposes the next accepted string)
//! and the lexicon (which proposes the next stored key), so its cost follows
//! the number of matches and the automaton size rather than the lexicon size.
//!
//! # Architecture
//!
//! - [`corpus`] -- the sorted-key interface and the in-memory [`SortedLexicon`] adapter
//! - [`search`] -- the two-cursor search driver
//! - [`handle`] -- [`FuzzyLexicon`], a loaded wordlist with search options
//!
//! # Example
//!
//! ```
//! use lexfuzz::FuzzyLexicon;
//!
//! let lexicon = FuzzyLexicon::from_wordlist("banana\nbapapa\npapapa\n").unwrap();
//! let hits = lexicon.lookup_with_distance("banana", 2).unwrap();
//! let words: Vec<&str> = hits.iter().map(|e| e.headword.as_str()).collect();
//! assert_eq!(words, ["banana", "bapapa"]);
//! ```

pub mod corpus;
pub mod handle;
pub mod search;

pub use corpus::{Corpus, SortedLexicon};
pub use handle::{FuzzyLexicon, LexiconError, SearchOptions};
pub use lexfuzz_core::entry::Entry;
pub use search::{SearchStats, search, search_keys, search_keys_with_stats};

/// Error type for fuzzy searches.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The requested edit distance is above the configured ceiling.
    #[error("edit distance {requested} exceeds the configured maximum of {max}")]
    DistanceTooLarge { requested: u32, max: u32 },

    /// The corpus failed to answer a lookup. The search cannot resume from
    /// the middle, so the failure is passed through unchanged.
    #[error("corpus lookup failed: {0}")]
    Corpus(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SearchError {
    pub(crate) fn corpus<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Corpus(Box::new(err))
    }
}
