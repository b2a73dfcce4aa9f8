// FuzzyLexicon: a loaded wordlist plus search options.
//
// Owns the in-memory SortedLexicon of entries and applies the configured
// default and maximum edit distances before handing queries to the driver.
// Each lookup builds its own automaton, so a shared `&FuzzyLexicon` can serve
// concurrent lookups.

use lexfuzz_core::entry::Entry;

use crate::SearchError;
use crate::corpus::SortedLexicon;
use crate::search::search;

/// Error type for wordlist loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A `key<TAB>headword` line had an empty key.
    #[error("line {line}: empty key")]
    EmptyKey { line: usize },
}

/// Search options applied by [`FuzzyLexicon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Edit distance used by [`FuzzyLexicon::lookup`].
    pub default_distance: u32,
    /// Largest edit distance a lookup may request. Automaton size and
    /// backtracking grow with the distance, so this bounds per-query work.
    pub max_distance: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            default_distance: 1,
            max_distance: 3,
        }
    }
}

/// A searchable lexicon of [`Entry`] records.
#[derive(Debug, Clone, Default)]
pub struct FuzzyLexicon {
    lexicon: SortedLexicon<Entry>,
    options: SearchOptions,
}

impl FuzzyLexicon {
    /// Create a lexicon from entries, indexed by their `key`.
    pub fn new(entries: Vec<Entry>) -> Self {
        let lexicon = SortedLexicon::new(entries.into_iter().map(|e| (e.key.clone(), e)));
        Self {
            lexicon,
            options: SearchOptions::default(),
        }
    }

    /// Parse a wordlist.
    ///
    /// One entry per line, either `headword` (key and headword are the same)
    /// or `key<TAB>headword`. Blank lines and lines starting with `#` are
    /// skipped. Entry ids count the accepted lines from zero.
    pub fn from_wordlist(text: &str) -> Result<Self, LexiconError> {
        let mut entries = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let id = entries.len();
            let entry = match line.split_once('\t') {
                Some((key, headword)) => {
                    let key = key.trim();
                    if key.is_empty() {
                        return Err(LexiconError::EmptyKey { line: i + 1 });
                    }
                    let headword = headword.trim();
                    Entry {
                        id,
                        key: key.to_string(),
                        headword: if headword.is_empty() { key } else { headword }.to_string(),
                    }
                }
                None => Entry::plain(id, line.trim()),
            };
            entries.push(entry);
        }

        Ok(Self::new(entries))
    }

    /// Replace the search options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn set_default_distance(&mut self, distance: u32) {
        self.options.default_distance = distance;
    }

    pub fn set_max_distance(&mut self, distance: u32) {
        self.options.max_distance = distance;
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Number of entries (several entries may share a key).
    pub fn entry_count(&self) -> usize {
        self.lexicon.record_count()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lexicon.contains_key(key)
    }

    /// The underlying sorted lexicon, usable directly as a [`crate::Corpus`].
    pub fn corpus(&self) -> &SortedLexicon<Entry> {
        &self.lexicon
    }

    /// Entries within the default edit distance of `term`.
    pub fn lookup(&self, term: &str) -> Result<Vec<Entry>, SearchError> {
        self.lookup_with_distance(term, self.options.default_distance)
    }

    /// Entries whose key is within `distance` edits of `term`.
    ///
    /// `term` must already be in the same simplified form as the keys.
    pub fn lookup_with_distance(&self, term: &str, distance: u32) -> Result<Vec<Entry>, SearchError> {
        if distance > self.options.max_distance {
            return Err(SearchError::DistanceTooLarge {
                requested: distance,
                max: self.options.max_distance,
            });
        }
        search(&self.lexicon, term, distance)
    }
}
