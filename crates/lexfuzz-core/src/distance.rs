// Reference Levenshtein distance over code points.

/// Computes the Levenshtein distance between `a` and `b`, counting
/// insertions, deletions and substitutions of single code points.
///
/// Uses the two-row dynamic programming formulation, so memory is
/// proportional to the length of `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Returns `true` if `a` and `b` are within Levenshtein distance `k`.
pub fn within_distance(a: &str, b: &str, k: usize) -> bool {
    // Length difference is a lower bound on the distance.
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la.abs_diff(lb) > k {
        return false;
    }
    levenshtein(a, b) <= k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical() {
        assert_eq!(levenshtein("banana", "banana"), 0);
    }

    #[test]
    fn empty_sides() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn single_edits() {
        assert_eq!(levenshtein("a", "b"), 1);
        assert_eq!(levenshtein("ab", "a"), 1);
        assert_eq!(levenshtein("a", "ab"), 1);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("banana", "bapapa"), 2);
        assert_eq!(levenshtein("banana", "papapa"), 3);
    }

    #[test]
    fn counts_code_points_not_bytes() {
        assert_eq!(levenshtein("\u{00E4}iti", "aiti"), 1);
        assert_eq!(levenshtein("\u{017E}", ""), 1);
    }

    #[test]
    fn within_distance_uses_length_bound() {
        assert!(within_distance("a", "bb", 2));
        assert!(!within_distance("a", "bb", 1));
        assert!(!within_distance("", "abcd", 3));
    }
}
