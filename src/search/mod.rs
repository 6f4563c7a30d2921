//! Exact substring search over 16-bit code units
//!
//! Three independent matchers locate every starting position of a needle
//! inside a haystack, each with its own cost profile:
//!
//! - [`boyer_moore`]: right-to-left window scan with a last-occurrence skip
//!   table, sublinear on average
//! - [`kmp`]: left-to-right linear scan driven by a failure function, the
//!   only matcher reporting overlapping occurrences
//! - [`rabin_karp`]: rolling-hash window comparison with literal
//!   verification, O(1) window slides
//!
//! All three agree exactly on inputs whose occurrences do not overlap. The
//! [`SearchAlgorithm`] enum selects one behind a uniform call surface;
//! the per-algorithm modules expose their building blocks ([`SkipTable`],
//! [`FailureFunction`], [`rolling_hash`]) for direct use.

pub mod boyer_moore;
pub mod kmp;
pub mod rabin_karp;
pub mod rolling_hash;

pub use boyer_moore::SkipTable;
pub use kmp::FailureFunction;

use crate::error::Result;
use std::fmt;

/// Ascending, duplicate-free zero-based match-start indices
pub type MatchList = Vec<usize>;

/// Selects one of the three search implementations
///
/// The variant set is closed: tests and benchmarks iterate
/// [`SearchAlgorithm::ALL`] to run every matcher against the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// Skip-table scan; non-overlapping matches
    BoyerMoore,
    /// Failure-function scan; overlapping matches
    KnuthMorrisPratt,
    /// Rolling-hash scan; non-overlapping matches
    RabinKarp,
}

impl SearchAlgorithm {
    /// Every matcher, in a fixed order
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::BoyerMoore,
        SearchAlgorithm::KnuthMorrisPratt,
        SearchAlgorithm::RabinKarp,
    ];

    /// Find occurrences of `needle` in `haystack` with this matcher
    pub fn search(&self, needle: &[u16], haystack: &[u16]) -> Result<MatchList> {
        match self {
            Self::BoyerMoore => boyer_moore::search(needle, haystack),
            Self::KnuthMorrisPratt => kmp::search(needle, haystack),
            Self::RabinKarp => rabin_karp::search(needle, haystack),
        }
    }

    /// Search string slices by their UTF-16 code units
    ///
    /// Match indices count code units, so a character outside the Basic
    /// Multilingual Plane occupies two positions.
    pub fn search_str(&self, needle: &str, haystack: &str) -> Result<MatchList> {
        self.search(&code_units(needle), &code_units(haystack))
    }

    /// Short identifier, stable across releases, usable in logs and
    /// benchmark IDs
    pub fn name(&self) -> &'static str {
        match self {
            Self::BoyerMoore => "boyer_moore",
            Self::KnuthMorrisPratt => "kmp",
            Self::RabinKarp => "rabin_karp",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expand a string into its UTF-16 code units
pub fn code_units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
