//! # ntcalc-parallel
//!
//! Parallel execution for NTCalc-rs: static range partitioning and the
//! multi-threaded prime counter.

pub mod counter;
pub mod partition;

// Re-exports
pub use counter::{count_primes, count_primes_auto, count_primes_pooled};
pub use partition::{partition, Chunk};
