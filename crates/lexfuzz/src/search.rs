// Two-cursor fuzzy search driver.
//
// The automaton cursor proposes the smallest accepted string >= probe; the
// corpus cursor answers with the smallest stored key >= that string. Equal
// answers are hits. Either way the probe only moves forward, so the loop
// touches each match once and skips everything the automaton rules out.

use lexfuzz_automaton::{Automaton, Dfa, next_accepted_string};
use lexfuzz_core::character::append_sentinel;

use crate::SearchError;
use crate::corpus::Corpus;

/// Counters for one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to the smallest-accepted-string oracle.
    pub oracle_calls: usize,
    /// `next_key_at_or_after` requests sent to the corpus.
    pub corpus_lookups: usize,
    /// Keys accepted by the automaton and present in the corpus.
    pub hits: usize,
}

/// Runs the driver loop and returns the matching keys in corpus order,
/// along with counters.
pub fn search_keys_with_stats<C, A>(
    corpus: &C,
    automaton: &A,
) -> Result<(Vec<String>, SearchStats), SearchError>
where
    C: Corpus + ?Sized,
    A: Automaton,
{
    let mut stats = SearchStats::default();
    let mut matches = Vec::new();
    let mut probe = String::new();

    loop {
        stats.oracle_calls += 1;
        let Some(candidate) = next_accepted_string(automaton, &probe) else {
            break;
        };

        stats.corpus_lookups += 1;
        let Some(key) = corpus
            .next_key_at_or_after(&candidate)
            .map_err(SearchError::corpus)?
        else {
            break;
        };

        if key == candidate {
            // Look strictly past this key next time.
            probe = append_sentinel(&candidate);
            matches.push(candidate);
            stats.hits += 1;
        } else {
            debug_assert!(*key > *candidate, "corpus returned a key below the probe");
            probe = key.into_owned();
        }
    }

    Ok((matches, stats))
}

/// Keys of `corpus` accepted by `automaton`, in corpus order, without
/// duplicates.
pub fn search_keys<C, A>(corpus: &C, automaton: &A) -> Result<Vec<String>, SearchError>
where
    C: Corpus + ?Sized,
    A: Automaton,
{
    search_keys_with_stats(corpus, automaton).map(|(keys, _)| keys)
}

/// Records of `corpus` whose key is within Levenshtein distance `max_edits`
/// of `term`.
///
/// Builds a fresh automaton for the query, collects the matching keys and
/// maps them through [`Corpus::records_for_keys`]. Records come back grouped
/// by key in corpus order; callers should not depend on that order.
pub fn search<C>(corpus: &C, term: &str, max_edits: u32) -> Result<Vec<C::Record>, SearchError>
where
    C: Corpus + ?Sized,
{
    let dfa = Dfa::levenshtein(term, max_edits);
    let keys = search_keys(corpus, &dfa)?;
    if keys.is_empty() {
        return Ok(Vec::new());
    }
    corpus.records_for_keys(&keys).map_err(SearchError::corpus)
}
