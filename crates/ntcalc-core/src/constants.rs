//! Constants for sequence bounds, cache sizing, and exit codes.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Capacity of the per-thread primality cache.
pub const PRIME_CACHE_CAPACITY: usize = 1000;

/// Exit codes used by the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
}
