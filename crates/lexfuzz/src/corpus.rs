// Sorted-key corpus interface and the in-memory adapter.

use std::borrow::Cow;
use std::convert::Infallible;

/// A sorted key space the search driver can seek in.
///
/// Implementations may sit on top of an index or a database; each lookup is a
/// single request-response step and the driver never issues them
/// concurrently. Keys compare by code point (plain `str` ordering).
pub trait Corpus {
    /// Caller-level record a key maps back to.
    type Record;

    /// Lookup failure. Propagated to the caller as [`crate::SearchError::Corpus`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Smallest stored key `>= probe`, or `None` if every key is smaller.
    fn next_key_at_or_after(&self, probe: &str) -> Result<Option<Cow<'_, str>>, Self::Error>;

    /// Records for the given keys. Keys that are not stored contribute nothing.
    fn records_for_keys(&self, keys: &[String]) -> Result<Vec<Self::Record>, Self::Error>;
}

/// In-memory corpus: a materialized sorted key vector plus the records
/// grouped under each key.
///
/// Built once per lexicon, then searched with binary search. Several records
/// may share a key; they are all returned for that key, in insertion order.
#[derive(Debug, Clone)]
pub struct SortedLexicon<R> {
    /// Distinct keys, ascending.
    keys: Vec<String>,
    /// `records[offsets[i]..offsets[i + 1]]` belong to `keys[i]`.
    offsets: Vec<usize>,
    records: Vec<R>,
}

impl<R> Default for SortedLexicon<R> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            offsets: vec![0],
            records: Vec::new(),
        }
    }
}

impl<R> SortedLexicon<R> {
    /// Build from `(key, record)` pairs in any order.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, R)>,
    {
        let mut pairs: Vec<(String, R)> = entries.into_iter().collect();
        // Stable: records sharing a key keep their insertion order.
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut lexicon = Self::default();
        lexicon.records.reserve(pairs.len());
        for (key, record) in pairs {
            if lexicon.keys.last() != Some(&key) {
                if !lexicon.keys.is_empty() {
                    lexicon.offsets.push(lexicon.records.len());
                }
                lexicon.keys.push(key);
            }
            lexicon.records.push(record);
        }
        if !lexicon.keys.is_empty() {
            lexicon.offsets.push(lexicon.records.len());
        }
        lexicon
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// All distinct keys, ascending.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.key_index(key).is_some()
    }

    /// Records stored under `key` (empty if the key is absent).
    pub fn records_for_key(&self, key: &str) -> &[R] {
        match self.key_index(key) {
            Some(i) => &self.records[self.offsets[i]..self.offsets[i + 1]],
            None => &[],
        }
    }

    /// Smallest stored key `>= probe`.
    pub fn key_at_or_after(&self, probe: &str) -> Option<&str> {
        let i = self.keys.partition_point(|k| k.as_str() < probe);
        self.keys.get(i).map(String::as_str)
    }

    fn key_index(&self, key: &str) -> Option<usize> {
        self.keys.binary_search_by(|k| k.as_str().cmp(key)).ok()
    }
}

impl<R: Clone> Corpus for SortedLexicon<R> {
    type Record = R;
    type Error = Infallible;

    fn next_key_at_or_after(&self, probe: &str) -> Result<Option<Cow<'_, str>>, Infallible> {
        Ok(self.key_at_or_after(probe).map(Cow::Borrowed))
    }

    fn records_for_keys(&self, keys: &[String]) -> Result<Vec<R>, Infallible> {
        Ok(keys
            .iter()
            .flat_map(|k| self.records_for_key(k).iter().cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str]) -> SortedLexicon<usize> {
        SortedLexicon::new(words.iter().enumerate().map(|(i, w)| (w.to_string(), i)))
    }

    #[test]
    fn keys_are_sorted_and_distinct() {
        let lex = lexicon(&["c", "a", "b", "a"]);
        assert_eq!(lex.keys(), &["a", "b", "c"]);
        assert_eq!(lex.len(), 3);
        assert_eq!(lex.record_count(), 4);
    }

    #[test]
    fn duplicate_keys_keep_all_records_in_order() {
        let lex = lexicon(&["b", "a", "b", "c", "b"]);
        assert_eq!(lex.records_for_key("b"), &[0, 2, 4]);
        assert_eq!(lex.records_for_key("a"), &[1]);
        assert_eq!(lex.records_for_key("zz"), &[] as &[usize]);
    }

    #[test]
    fn key_at_or_after_seeks() {
        let lex = lexicon(&["apple", "banana", "cherry"]);
        assert_eq!(lex.key_at_or_after(""), Some("apple"));
        assert_eq!(lex.key_at_or_after("banana"), Some("banana"));
        assert_eq!(lex.key_at_or_after("banana\0"), Some("cherry"));
        assert_eq!(lex.key_at_or_after("b"), Some("banana"));
        assert_eq!(lex.key_at_or_after("d"), None);
    }

    #[test]
    fn empty_lexicon() {
        let lex: SortedLexicon<usize> = SortedLexicon::new(Vec::new());
        assert!(lex.is_empty());
        assert_eq!(lex.key_at_or_after(""), None);
        assert!(!lex.contains_key(""));
        assert_eq!(lex.records_for_keys(&["a".to_string()]), Ok(vec![]));
    }

    #[test]
    fn corpus_interface() {
        let lex = lexicon(&["a", "b", "b"]);
        assert_eq!(
            lex.next_key_at_or_after("a\0"),
            Ok(Some(Cow::Borrowed("b")))
        );
        let keys = vec!["b".to_string(), "missing".to_string(), "a".to_string()];
        assert_eq!(lex.records_for_keys(&keys), Ok(vec![1, 2, 0]));
    }

    #[test]
    fn empty_string_is_a_valid_key() {
        let lex = lexicon(&["", "a"]);
        assert!(lex.contains_key(""));
        assert_eq!(lex.key_at_or_after(""), Some(""));
    }
}
