//! Rolling-hash search (Rabin–Karp style)
//!
//! Compares a hash of each haystack window against the needle's hash and
//! verifies candidates symbol by symbol, so hash collisions can cost time but
//! never produce a false match. Sliding the window costs O(1) via
//! [`update_hash`]; after a reported match the scan jumps past the matched
//! span and rehashes from scratch, keeping the non-overlap policy of the
//! skip-table matcher. Expected O(n), adversarial O(n·m).
//!
//! # Usage
//!
//! ```rust
//! use patscan::search::rabin_karp::search;
//!
//! let needle: Vec<u16> = "ab".encode_utf16().collect();
//! let haystack: Vec<u16> = "ababab".encode_utf16().collect();
//! assert_eq!(search(&needle, &haystack).unwrap(), vec![0, 2, 4]);
//! ```

use crate::error::{check_search_inputs, Result};
use crate::search::rolling_hash::{hash, update_hash, window_power};
use crate::search::MatchList;

/// Find all non-overlapping occurrences of `needle` in `haystack`
///
/// Returns ascending match starts. Every hash hit is verified against the
/// actual symbols before being reported.
pub fn search(needle: &[u16], haystack: &[u16]) -> Result<MatchList> {
    check_search_inputs(needle.len(), haystack.len())?;
    let m = needle.len();
    let n = haystack.len();
    let needle_hash = hash(needle);
    let power = window_power(m);
    let mut matches = Vec::with_capacity(n / m);

    let mut window_hash = hash(&haystack[0..m]);
    let mut i = 0;
    while i + m <= n {
        if window_hash == needle_hash && haystack[i..i + m] == needle[..] {
            matches.push(i);
            i += m;
            if i + m <= n {
                // Rehash the window past the matched span. The fresh hash is
                // compared on the next pass before any further rolling, so
                // the window starting exactly at the match end is examined.
                window_hash = hash(&haystack[i..i + m]);
            } else {
                break;
            }
        } else if i + m < n {
            window_hash = update_hash(window_hash, power, haystack[i + m], haystack[i]);
            i += 1;
        } else {
            break;
        }
    }
    Ok(matches)
}
