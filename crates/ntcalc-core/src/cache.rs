//! Per-thread memoization for repeated primality queries.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::constants::PRIME_CACHE_CAPACITY;
use crate::primality::is_prime;

thread_local! {
    static PRIME_CACHE: RefCell<VecDeque<(u64, bool)>> =
        RefCell::new(VecDeque::with_capacity(PRIME_CACHE_CAPACITY));
}

/// Memoized [`is_prime`], backed by storage private to the calling thread.
///
/// A hit costs a linear scan of at most [`PRIME_CACHE_CAPACITY`]
/// entries; a miss computes the verdict, evicts the oldest entry once
/// the cache is full, and appends the new pair. Each thread owns an
/// independent cache, so reads and writes involve no synchronization
/// and the storage is reclaimed when the thread exits.
///
/// Verdicts are always identical to the uncached engine's; only the
/// latency differs.
#[must_use]
pub fn is_prime_cached(n: u64) -> bool {
    PRIME_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some(&(_, verdict)) = cache.iter().find(|&&(cached, _)| cached == n) {
            return verdict;
        }

        let verdict = is_prime(n);
        if cache.len() >= PRIME_CACHE_CAPACITY {
            cache.pop_front();
        }
        cache.push_back((n, verdict));
        verdict
    })
}
