//! Rolling polynomial hash over 16-bit code units
//!
//! This module provides the hash primitives behind the Rabin–Karp matcher:
//! a positional polynomial hash of a window and an O(1) update that slides
//! the window one position to the right. All arithmetic is 32-bit wrapping;
//! the wraparound modulo 2^32 IS the hash modulus, so widening or saturating
//! arithmetic would change every value and break cross-window comparisons.
//!
//! # Usage
//!
//! ```rust
//! use patscan::search::rolling_hash::{hash, update_hash, window_power};
//!
//! let first = hash(&[1, 2]);
//! let power = window_power(2);
//!
//! // Slide [1, 2] one position right: 1 leaves, 3 enters.
//! let slid = update_hash(first, power, 3, 1);
//! assert_eq!(slid, hash(&[2, 3]));
//! ```

/// Base of the positional polynomial
///
/// Fixed so hash values reproduce bit-for-bit across implementations;
/// collision patterns depend on it.
pub const HASH_BASE: i32 = 1332;

/// Hash a window of code units
///
/// The window is a polynomial in [`HASH_BASE`] with the leftmost symbol at
/// the highest exponent and the rightmost at exponent zero, evaluated by
/// Horner's rule. An empty window hashes to zero.
#[inline]
pub fn hash(window: &[u16]) -> i32 {
    window.iter().fold(0i32, |acc, &sym| {
        acc.wrapping_mul(HASH_BASE).wrapping_add(sym as i32)
    })
}

/// Compute the power [`HASH_BASE`]^len used by [`update_hash`]
///
/// The exponent is the full window length, not length minus one: the update
/// multiplies the old hash by the base first, which raises the outgoing
/// symbol's weight from `len - 1` to `len` before it is subtracted.
#[inline]
pub fn window_power(len: usize) -> i32 {
    (0..len).fold(1i32, |acc, _| acc.wrapping_mul(HASH_BASE))
}

/// Slide a window hash one position to the right
///
/// `old_hash` covers a window of some length `len`, `power` is
/// [`window_power`]`(len)`, `outgoing` is the symbol leaving on the left and
/// `incoming` the symbol entering on the right. Returns the hash of the slid
/// window, bit-identical to rehashing it from scratch.
#[inline]
pub fn update_hash(old_hash: i32, power: i32, incoming: u16, outgoing: u16) -> i32 {
    old_hash
        .wrapping_mul(HASH_BASE)
        .wrapping_sub((outgoing as i32).wrapping_mul(power))
        .wrapping_add(incoming as i32)
}
