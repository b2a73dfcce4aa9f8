//! Shared leaf types for lexfuzz.
//!
//! - [`character`] -- code point ordering helpers (sentinel, successor)
//! - [`distance`] -- reference Levenshtein distance over code points
//! - [`entry`] -- the lexicon record handed back to callers

pub mod character;
pub mod distance;
pub mod entry;
