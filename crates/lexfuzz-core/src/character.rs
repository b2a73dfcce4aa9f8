// Code point ordering helpers.
//
// Strings are compared by code point. Rust's `str` ordering is byte-wise over
// UTF-8, which coincides with code point order, so `String` comparisons and
// `&[char]` comparisons always agree.

/// The smallest Unicode scalar value.
///
/// Appending it to a string yields the smallest string strictly greater than
/// the original.
pub const MIN_CHAR: char = '\0';

/// First code point of the UTF-16 surrogate range (not a valid `char`).
const SURROGATE_START: u32 = 0xD800;

/// First code point after the UTF-16 surrogate range.
const SURROGATE_END: u32 = 0xE000;

/// Returns the next Unicode scalar value after `c`, or `None` for `char::MAX`.
///
/// Surrogate code points are skipped: the successor of `U+D7FF` is `U+E000`.
pub fn successor(c: char) -> Option<char> {
    let next = c as u32 + 1;
    if next == SURROGATE_START {
        return char::from_u32(SURROGATE_END);
    }
    char::from_u32(next)
}

/// Returns `s` followed by [`MIN_CHAR`]: the immediate successor of `s` in
/// string order.
pub fn append_sentinel(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    out.push_str(s);
    out.push(MIN_CHAR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_ascii() {
        assert_eq!(successor('a'), Some('b'));
        assert_eq!(successor(MIN_CHAR), Some('\u{1}'));
    }

    #[test]
    fn successor_skips_surrogates() {
        assert_eq!(successor('\u{D7FF}'), Some('\u{E000}'));
    }

    #[test]
    fn successor_of_max_is_none() {
        assert_eq!(successor(char::MAX), None);
    }

    #[test]
    fn sentinel_is_immediate_successor() {
        let s = append_sentinel("ab");
        assert_eq!(s, "ab\0");
        assert!(s.as_str() > "ab");
        assert!(s.as_str() < "ab\u{1}");
        assert!(s.as_str() < "aba");
    }

    #[test]
    fn str_order_matches_code_point_order() {
        let a = "z";
        let b = "\u{00E4}";
        let ca: Vec<char> = a.chars().collect();
        let cb: Vec<char> = b.chars().collect();
        assert_eq!(a.cmp(b), ca.cmp(&cb));
    }
}
