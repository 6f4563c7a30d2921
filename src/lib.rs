//! # Patscan: Exact Substring Search over 16-bit Code Units
//!
//! This crate provides three independent exact-match string searching algorithms
//! over sequences of 16-bit code units, with a uniform dispatch surface and
//! independently usable building blocks.
//!
//! ## Key Features
//!
//! - **Skip-Table Search**: Boyer–Moore-style right-to-left scan, sublinear on average
//! - **Failure-Function Search**: Knuth–Morris–Pratt-style linear scan that reports overlapping matches
//! - **Rolling-Hash Search**: Rabin–Karp-style scan with O(1) window slides and literal verification
//! - **16-bit Alphabet**: code units 0..=65535 with UTF-16 string conveniences
//! - **Typed Degenerate Inputs**: empty or oversized needles surface as errors, not empty results
//! - **Exposed Building Blocks**: skip tables, failure functions, and hash primitives usable on their own
//!
//! ## Quick Start
//!
//! ```rust
//! use patscan::{code_units, SearchAlgorithm, SkipTable};
//!
//! // Linear matcher: every occurrence, overlaps included
//! let matches = SearchAlgorithm::KnuthMorrisPratt
//!     .search_str("ana", "banana")
//!     .unwrap();
//! assert_eq!(matches, vec![1, 3]);
//!
//! // Skip-table matcher: non-overlapping occurrences only
//! let matches = SearchAlgorithm::BoyerMoore
//!     .search_str("ana", "banana")
//!     .unwrap();
//! assert_eq!(matches, vec![1]);
//!
//! // All matchers agree when occurrences cannot overlap
//! let needle = code_units("ab");
//! let haystack = code_units("ababab");
//! for algorithm in SearchAlgorithm::ALL {
//!     assert_eq!(algorithm.search(&needle, &haystack).unwrap(), vec![0, 2, 4]);
//! }
//!
//! // Building blocks stand alone
//! let table = SkipTable::new(&code_units("ana")).unwrap();
//! assert_eq!(table.shift_for('b' as u16), 3);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod search;

// Re-export core types
pub use error::{check_search_inputs, Result, SearchError};
pub use search::{code_units, FailureFunction, MatchList, SearchAlgorithm, SkipTable};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing patscan v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(VERSION.len() > 0);
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        // Version should be semver format like "0.1.0"
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_re_exports() {
        let needle = code_units("abc");
        let _table = SkipTable::new(&needle).unwrap();
        let _failure = FailureFunction::new(&needle).unwrap();

        let err = SearchError::EmptyNeedle;
        assert_eq!(err.category(), "needle");
        assert!(std::any::type_name::<Result<()>>().contains("SearchError"));

        let matches: MatchList = SearchAlgorithm::RabinKarp
            .search(&needle, &code_units("xabcx"))
            .unwrap();
        assert_eq!(matches, vec![1]);
    }

    #[test]
    fn test_multiple_init_calls() {
        // Calling init multiple times should be safe
        init();
        init();
        init();
    }
}
