// Lexicon entry record.

/// A lexicon entry as seen by callers.
///
/// `key` is the simplified, comparable form that fuzzy matching runs against
/// (e.g. lowercased and stripped of accents by whoever built the lexicon).
/// `headword` is the display form. `id` is the entry's position in the source
/// wordlist, so entries sharing a key stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub id: usize,
    pub key: String,
    pub headword: String,
}

impl Entry {
    /// Create an entry whose key and headword are the same string.
    pub fn plain(id: usize, word: &str) -> Self {
        Self {
            id,
            key: word.to_string(),
            headword: word.to_string(),
        }
    }
}
