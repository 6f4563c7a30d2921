//! Linear-time failure-function search (Knuth–Morris–Pratt style)
//!
//! Scans the haystack left to right, never moving the haystack cursor
//! backwards; on mismatch the precomputed failure function tells the needle
//! cursor how far it can fall back without losing a potential match. After a
//! full match the cursor resumes from the needle's own longest border, so
//! occurrences that overlap a reported one are still discovered. This is the
//! one matcher in the crate that reports overlapping occurrences; the
//! skip-table and rolling-hash matchers advance past each matched span.
//!
//! # Usage
//!
//! ```rust
//! use patscan::search::kmp::{search, FailureFunction};
//!
//! let needle: Vec<u16> = "ana".encode_utf16().collect();
//! let haystack: Vec<u16> = "banana".encode_utf16().collect();
//! assert_eq!(search(&needle, &haystack).unwrap(), vec![1, 3]);
//!
//! let failure = FailureFunction::new(&needle).unwrap();
//! assert_eq!(failure.as_slice(), &[-1, 0, 0]);
//! assert_eq!(failure.full_border(), 1); // "ana" begins and ends with "a"
//! ```

use crate::error::{check_search_inputs, Result, SearchError};
use crate::search::MatchList;

/// Border table for the linear matcher
///
/// `values[i]` is the length of the longest proper prefix of the needle that
/// is also a proper suffix of its first `i` symbols, with `values[0] = -1` as
/// a sentinel. Alongside the table the constructor records the border of the
/// whole needle, which the matcher resumes from after reporting a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureFunction {
    values: Vec<isize>,
    full_border: usize,
}

impl FailureFunction {
    /// Build the failure function for `needle`
    ///
    /// Returns [`SearchError::EmptyNeedle`] for an empty needle. Runs in
    /// O(needle length): each comparison either advances the build position
    /// or strictly shrinks the candidate border.
    pub fn new(needle: &[u16]) -> Result<Self> {
        if needle.is_empty() {
            return Err(SearchError::EmptyNeedle);
        }
        let m = needle.len();
        let mut values = vec![0isize; m];
        values[0] = -1;

        // cnd is the border of the prefix examined so far; pos runs one past
        // the end to compute the border of the entire needle.
        let mut full_border = 0;
        let mut cnd = 0usize;
        let mut pos = 2;
        while pos <= m {
            if needle[pos - 1] == needle[cnd] {
                cnd += 1;
                if pos < m {
                    values[pos] = cnd as isize;
                } else {
                    full_border = cnd;
                }
                pos += 1;
            } else if cnd > 0 {
                // values[cnd] is non-negative for every cnd >= 1.
                cnd = values[cnd] as usize;
            } else {
                if pos == m {
                    full_border = 0;
                }
                pos += 1;
            }
        }

        Ok(Self {
            values,
            full_border,
        })
    }

    /// Border values, one per needle symbol, `values[0] == -1`
    #[inline]
    pub fn as_slice(&self) -> &[isize] {
        &self.values
    }

    /// Number of entries, equal to the needle length
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty needles
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Border of the entire needle, the resume point after a full match
    #[inline]
    pub fn full_border(&self) -> usize {
        self.full_border
    }
}

/// Find all occurrences of `needle` in `haystack`, including overlapping ones
///
/// Returns ascending match starts. O(needle length + haystack length): the
/// haystack cursor only moves forward and needle-cursor fallbacks are bounded
/// by its advances.
pub fn search(needle: &[u16], haystack: &[u16]) -> Result<MatchList> {
    check_search_inputs(needle.len(), haystack.len())?;
    let failure = FailureFunction::new(needle)?;
    let m = needle.len();
    let n = haystack.len();
    let values = failure.as_slice();
    let mut matches = Vec::with_capacity(n / m);

    let mut i = 0; // haystack cursor, never decreases
    let mut j = 0; // needle cursor
    while i < n {
        if needle[j] == haystack[i] {
            i += 1;
            j += 1;
            if j == m {
                matches.push(i - m);
                // Resume from the needle's own border: the longest prefix
                // still alive at this haystack position. Overlapping
                // occurrences stay reachable.
                j = failure.full_border();
            }
        } else if j > 0 {
            j = values[j] as usize;
        } else {
            i += 1;
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_failure_rejects_empty_needle() {
        assert!(matches!(
            FailureFunction::new(&[]),
            Err(SearchError::EmptyNeedle)
        ));
    }

    #[test]
    fn test_failure_single_symbol() {
        let failure = FailureFunction::new(&[7]).unwrap();
        assert_eq!(failure.as_slice(), &[-1]);
        assert_eq!(failure.len(), 1);
        assert!(!failure.is_empty());
        assert_eq!(failure.full_border(), 0);
    }

    #[test]
    fn test_failure_base_cases() {
        let failure = FailureFunction::new(&units("ab")).unwrap();
        assert_eq!(failure.as_slice(), &[-1, 0]);
        assert_eq!(failure.full_border(), 0);
    }

    #[test]
    fn test_failure_repeated_symbol() {
        let failure = FailureFunction::new(&units("aaaa")).unwrap();
        assert_eq!(failure.as_slice(), &[-1, 0, 1, 2]);
        assert_eq!(failure.full_border(), 3);
    }

    #[test]
    fn test_failure_alternating() {
        let failure = FailureFunction::new(&units("abab")).unwrap();
        assert_eq!(failure.as_slice(), &[-1, 0, 0, 1]);
        assert_eq!(failure.full_border(), 2);
    }

    #[test]
    fn test_failure_no_border() {
        let failure = FailureFunction::new(&units("abcd")).unwrap();
        assert_eq!(failure.as_slice(), &[-1, 0, 0, 0]);
        assert_eq!(failure.full_border(), 0);
    }

    #[test]
    fn test_failure_nested_borders() {
        // "abacaba": borders of prefixes grow and collapse.
        let failure = FailureFunction::new(&units("abacaba")).unwrap();
        assert_eq!(failure.as_slice(), &[-1, 0, 0, 1, 0, 1, 2]);
        assert_eq!(failure.full_border(), 3);
    }

    #[test]
    fn test_search_single_match() {
        assert_eq!(search(&units("abc"), &units("xxabcxx")).unwrap(), vec![2]);
    }

    #[test]
    fn test_search_no_match() {
        assert_eq!(
            search(&units("xyz"), &units("abcabcabc")).unwrap(),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn test_search_adjacent_matches() {
        assert_eq!(search(&units("ab"), &units("ababab")).unwrap(), vec![0, 2, 4]);
    }

    #[test]
    fn test_search_overlapping_matches() {
        assert_eq!(search(&units("aa"), &units("aaaa")).unwrap(), vec![0, 1, 2]);
        assert_eq!(search(&units("aba"), &units("ababa")).unwrap(), vec![0, 2]);
        assert_eq!(search(&units("ana"), &units("banana")).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_search_full_haystack() {
        assert_eq!(search(&units("same"), &units("same")).unwrap(), vec![0]);
    }

    #[test]
    fn test_search_degenerate_inputs() {
        assert_eq!(search(&[], &units("abc")), Err(SearchError::EmptyNeedle));
        assert_eq!(search(&units("abc"), &[]), Err(SearchError::EmptyHaystack));
        assert_eq!(
            search(&units("abcd"), &units("abc")),
            Err(SearchError::needle_too_long(4, 3))
        );
    }

    #[test]
    fn test_search_wide_symbols() {
        let needle = [65535u16, 0, 65535];
        let haystack = [65535u16, 0, 65535, 0, 65535];
        // Overlapping occurrences at 0 and 2 are both reported.
        assert_eq!(search(&needle, &haystack).unwrap(), vec![0, 2]);
    }
}
