//! # ntcalc-core
//!
//! Core library for NTCalc-rs: deterministic primality testing and
//! factorization, arithmetic primitives, an odd-only prime sieve, lazy
//! Fibonacci/prime sequences, and a per-thread primality cache.

pub mod arithmetic;
pub mod cache;
pub mod constants;
pub mod error;
pub mod primality;
pub mod sequence;
pub mod sieve;

// Re-exports
pub use arithmetic::{extended_gcd, gcd, lcm, mod_inverse, modpow};
pub use cache::is_prime_cached;
pub use constants::{exit_codes, MAX_FIB_U64, PRIME_CACHE_CAPACITY};
pub use error::NtError;
pub use primality::{is_prime, prime_factors};
pub use sequence::{FibonacciSequence, PrimeSequence};
pub use sieve::sieve;

/// The k-th prime, 1-indexed: `nth_prime(1)` is 2.
///
/// This is a convenience function for simple use cases; for bulk
/// enumeration use [`sieve`], and for streaming use [`PrimeSequence`]
/// directly.
///
/// # Example
/// ```
/// assert_eq!(ntcalc_core::nth_prime(10), Some(29));
/// assert_eq!(ntcalc_core::nth_prime(0), None);
/// ```
#[must_use]
pub fn nth_prime(k: u64) -> Option<u64> {
    if k == 0 {
        return None;
    }
    PrimeSequence::new(k).last()
}
