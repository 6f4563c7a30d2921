//! Error handling for the patscan library
//!
//! This module provides detailed error information for all search operations.
//! Every matcher validates its inputs through [`check_search_inputs`] before
//! touching them, so degenerate inputs surface as typed errors rather than
//! empty results.

use thiserror::Error;

/// Main error type for the patscan library
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The needle has no symbols, so no occurrence is definable
    #[error("Empty needle: nothing to search for")]
    EmptyNeedle,

    /// The haystack has no symbols, so no occurrence can exist
    #[error("Empty haystack: nothing to search in")]
    EmptyHaystack,

    /// The needle cannot fit inside the haystack
    #[error("Needle too long: needle {needle_len}, haystack {haystack_len}")]
    NeedleTooLong {
        /// Length of the needle in code units
        needle_len: usize,
        /// Length of the haystack in code units
        haystack_len: usize,
    },
}

impl SearchError {
    /// Create a needle-too-long error
    pub fn needle_too_long(needle_len: usize, haystack_len: usize) -> Self {
        Self::NeedleTooLong {
            needle_len,
            haystack_len,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyNeedle => "needle",
            Self::EmptyHaystack => "haystack",
            Self::NeedleTooLong { .. } => "length",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SearchError>;

/// Validate a needle/haystack pair before a search
///
/// Checks run in a fixed order so callers passing multiply-degenerate inputs
/// always see the same error: empty needle first, then empty haystack, then
/// the length comparison.
#[inline]
pub fn check_search_inputs(needle_len: usize, haystack_len: usize) -> Result<()> {
    if needle_len == 0 {
        return Err(SearchError::EmptyNeedle);
    }
    if haystack_len == 0 {
        return Err(SearchError::EmptyHaystack);
    }
    if needle_len > haystack_len {
        return Err(SearchError::needle_too_long(needle_len, haystack_len));
    }
    Ok(())
}
