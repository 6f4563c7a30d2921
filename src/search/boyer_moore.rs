//! Heuristic skip-table search (Boyer–Moore style)
//!
//! Compares the needle right to left inside a sliding window and consults a
//! last-occurrence table on mismatch to skip alignments that cannot match.
//! Sublinear on average, O(n·m) in the worst case. Matched spans are not
//! revisited, so reported occurrences never overlap.
//!
//! The table comes in two backends: a dense array with one entry per possible
//! code unit (constant-time lookup, 65536 entries regardless of needle size)
//! and a sparse hash map holding only the needle's symbols, for callers
//! searching many short-lived needles.
//!
//! # Usage
//!
//! ```rust
//! use patscan::search::boyer_moore::{search, SkipTable};
//!
//! let needle: Vec<u16> = "ana".encode_utf16().collect();
//! let haystack: Vec<u16> = "banana".encode_utf16().collect();
//! assert_eq!(search(&needle, &haystack).unwrap(), vec![1]);
//!
//! let table = SkipTable::new(&needle).unwrap();
//! assert_eq!(table.shift_for('b' as u16), 3); // absent symbol: full length
//! ```

use crate::error::{check_search_inputs, Result, SearchError};
use crate::search::MatchList;
use ahash::AHashMap;

/// Number of distinct code-unit values the skip table covers
pub const ALPHABET_SIZE: usize = 1 << 16;

#[derive(Debug, Clone)]
enum TableBackend {
    Dense(Vec<usize>),
    Sparse {
        shifts: AHashMap<u16, usize>,
        default: usize,
    },
}

/// Last-occurrence shift table for the heuristic matcher
///
/// Maps every code unit to a window shift: symbols absent from the needle
/// shift by the full needle length, symbols present by the distance from
/// their last occurrence to the needle's end, clamped to at least one so the
/// scan always advances.
#[derive(Debug, Clone)]
pub struct SkipTable {
    backend: TableBackend,
    needle_len: usize,
}

impl SkipTable {
    /// Build a dense table with one entry per possible code unit
    ///
    /// Returns [`SearchError::EmptyNeedle`] for an empty needle: no shift is
    /// definable for a needle with no symbols.
    pub fn new(needle: &[u16]) -> Result<Self> {
        if needle.is_empty() {
            return Err(SearchError::EmptyNeedle);
        }
        let len = needle.len();
        let mut shifts = vec![len; ALPHABET_SIZE];
        for (i, &sym) in needle.iter().enumerate() {
            // Later occurrences overwrite earlier ones; the clamp keeps the
            // final needle symbol from producing a zero shift.
            shifts[sym as usize] = (len - 1 - i).max(1);
        }
        Ok(Self {
            backend: TableBackend::Dense(shifts),
            needle_len: len,
        })
    }

    /// Build a sparse table holding only the needle's symbols
    ///
    /// Lookup falls back to the needle length for absent symbols, so both
    /// backends report identical shifts for all 65536 code units.
    pub fn sparse(needle: &[u16]) -> Result<Self> {
        if needle.is_empty() {
            return Err(SearchError::EmptyNeedle);
        }
        let len = needle.len();
        let mut shifts = AHashMap::with_capacity(len);
        for (i, &sym) in needle.iter().enumerate() {
            shifts.insert(sym, (len - 1 - i).max(1));
        }
        Ok(Self {
            backend: TableBackend::Sparse {
                shifts,
                default: len,
            },
            needle_len: len,
        })
    }

    /// Shift for a haystack symbol, always at least one
    #[inline]
    pub fn shift_for(&self, symbol: u16) -> usize {
        match &self.backend {
            TableBackend::Dense(shifts) => shifts[symbol as usize],
            TableBackend::Sparse { shifts, default } => {
                shifts.get(&symbol).copied().unwrap_or(*default)
            }
        }
    }

    /// Length of the needle this table was built from
    #[inline]
    pub fn needle_len(&self) -> usize {
        self.needle_len
    }
}

/// Find all non-overlapping occurrences of `needle` in `haystack`
///
/// Builds a dense [`SkipTable`] and scans with it. Returns ascending match
/// starts; occurrences sharing symbols with an earlier match are skipped.
pub fn search(needle: &[u16], haystack: &[u16]) -> Result<MatchList> {
    check_search_inputs(needle.len(), haystack.len())?;
    let table = SkipTable::new(needle)?;
    Ok(scan(needle, haystack, &table))
}

/// Scan with a caller-built table, dense or sparse
///
/// The table must have been built from this `needle`.
pub fn search_with_table(
    needle: &[u16],
    haystack: &[u16],
    table: &SkipTable,
) -> Result<MatchList> {
    check_search_inputs(needle.len(), haystack.len())?;
    debug_assert_eq!(table.needle_len(), needle.len());
    Ok(scan(needle, haystack, table))
}

fn scan(needle: &[u16], haystack: &[u16], table: &SkipTable) -> MatchList {
    let m = needle.len();
    let n = haystack.len();
    let mut matches = Vec::with_capacity(n / m);

    let mut window = 0;
    while window + m <= n {
        // Right-to-left comparison; k counts unverified needle symbols.
        let mut k = m;
        while k > 0 && needle[k - 1] == haystack[window + k - 1] {
            k -= 1;
        }
        if k == 0 {
            matches.push(window);
            window += m;
        } else {
            let mismatch = haystack[window + k - 1];
            let matched = m - k;
            // The raw table entry shifts a whole window; subtracting the
            // already-matched suffix aligns the needle's last occurrence of
            // the mismatched symbol under the mismatch position instead of
            // jumping past it. Never shifts by less than one.
            window += table.shift_for(mismatch).saturating_sub(matched).max(1);
        }
    }
    matches
}
