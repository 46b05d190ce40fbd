//! Concurrent prime counting over an inclusive range.
//!
//! One batch of worker threads is spawned per call and joined before
//! the call returns; there is no persistent pool and no cross-thread
//! state beyond the single shared accumulator. Each worker counts into
//! a private local before publishing once, so contention is limited to
//! one atomic add per worker.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use ntcalc_core::{is_prime, NtError};

use crate::partition::{partition, Chunk};

fn count_chunk(chunk: Chunk) -> u64 {
    let mut local = 0;
    for n in chunk.start..=chunk.end {
        if is_prime(n) {
            local += 1;
        }
    }
    local
}

/// Count primes in `[start, end]` using `threads` worker threads.
///
/// The range is statically partitioned into one chunk per worker; each
/// worker accumulates a private count and publishes it with a single
/// relaxed `fetch_add`. The join is the synchronization point for the
/// final read, so no stronger ordering is needed on the accumulator.
/// The total is deterministic regardless of scheduling: partitioning
/// is static and addition commutes.
///
/// A panicking worker surfaces as [`NtError::WorkerPanicked`] instead
/// of a silent under-count.
pub fn count_primes(start: u64, end: u64, threads: u32) -> Result<u64, NtError> {
    let chunks = partition(start, end, threads)?;
    debug!(start, end, workers = chunks.len(), "counting primes");

    let total = AtomicU64::new(0);
    thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|&chunk| {
                let total = &total;
                scope.spawn(move || {
                    let local = count_chunk(chunk);
                    total.fetch_add(local, Ordering::Relaxed);
                })
            })
            .collect();
        // Join every worker before reporting, so a fault cannot leave
        // stragglers running.
        let mut panicked = false;
        for handle in handles {
            panicked |= handle.join().is_err();
        }
        if panicked {
            Err(NtError::WorkerPanicked)
        } else {
            Ok(())
        }
    })?;

    Ok(total.load(Ordering::Relaxed))
}

/// Count primes with one worker per available CPU.
pub fn count_primes_auto(start: u64, end: u64) -> Result<u64, NtError> {
    let threads = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
    count_primes(start, end, u32::try_from(threads).unwrap_or(u32::MAX))
}

/// Pooled variant of [`count_primes`]: the same partitioning and
/// accumulate-then-join contract, executed on the shared rayon pool
/// instead of per-call threads. Results are identical for every input.
pub fn count_primes_pooled(start: u64, end: u64) -> Result<u64, NtError> {
    let workers = u32::try_from(rayon::current_num_threads()).unwrap_or(u32::MAX);
    let chunks = partition(start, end, workers.max(1))?;
    debug!(start, end, workers = chunks.len(), "counting primes on pool");

    let total = AtomicU64::new(0);
    chunks.par_iter().for_each(|&chunk| {
        let local = count_chunk(chunk);
        total.fetch_add(local, Ordering::Relaxed);
    });

    Ok(total.load(Ordering::Relaxed))
}
