//! Bulk prime enumeration via an odd-only sieve of Eratosthenes.

use tracing::debug;

/// All primes `<= limit`, ascending. Empty for `limit < 2`.
///
/// Composite flags cover odd values only; even numbers other than 2
/// are excluded implicitly, halving the working set. O(n log log n)
/// time, O(n/2) space.
///
/// # Example
/// ```
/// assert_eq!(ntcalc_core::sieve::sieve(30), [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(ntcalc_core::sieve::sieve(1).is_empty());
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn sieve(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    // Index k covers the odd value 2k + 1; index 0 (the unit 1) stays
    // unmarked but is never collected.
    let half = (limit + 1) / 2;
    let mut composite = vec![false; half];

    // pi(n) ~ n / ln n; reserving slightly above that avoids a late
    // regrowth of the output vector
    let estimate = (limit as f64 / (limit as f64).ln()) as usize + 8;
    let mut primes = Vec::with_capacity(estimate);
    primes.push(2);

    let mut i: usize = 3;
    while i * i <= limit {
        if !composite[i / 2] {
            let mut multiple = i * i;
            while multiple <= limit {
                composite[multiple / 2] = true;
                multiple += 2 * i;
            }
        }
        i += 2;
    }

    for k in 1..half {
        if !composite[k] {
            primes.push((2 * k + 1) as u64);
        }
    }

    debug!(limit, count = primes.len(), "sieve complete");
    primes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::is_prime;

    #[test]
    fn primes_up_to_30() {
        assert_eq!(sieve(30), [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn below_two_is_empty() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
    }

    #[test]
    fn tiny_limits() {
        assert_eq!(sieve(2), [2]);
        assert_eq!(sieve(3), [2, 3]);
        assert_eq!(sieve(4), [2, 3]);
        assert_eq!(sieve(5), [2, 3, 5]);
    }

    #[test]
    fn inclusive_upper_bound() {
        // a prime limit must appear in its own enumeration
        assert_eq!(sieve(29).last(), Some(&29));
        assert_eq!(sieve(28).last(), Some(&23));
    }

    #[test]
    fn counts_at_known_limits() {
        assert_eq!(sieve(100).len(), 25);
        assert_eq!(sieve(1_000).len(), 168);
        assert_eq!(sieve(10_000).len(), 1_229);
    }

    #[test]
    fn agrees_with_trial_division() {
        let primes = sieve(2_000);
        let expected: Vec<u64> = (0..=2_000).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, expected);
    }
}
