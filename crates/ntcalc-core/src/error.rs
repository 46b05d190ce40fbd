//! Error type shared by the ntcalc crates.

/// Error type for number-theory operations.
///
/// Every domain-constraint violation is rejected with one of these
/// variants before any arithmetic runs; there are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum NtError {
    /// Modular arithmetic with a zero modulus.
    #[error("modulus must be nonzero")]
    ZeroModulus,

    /// The element shares a factor with the modulus, so no inverse exists.
    #[error("{a} is not invertible modulo {modulus}")]
    NotInvertible {
        /// The element with no inverse.
        a: u64,
        /// The modulus it was taken against.
        modulus: u64,
    },

    /// Factorization of zero is undefined.
    #[error("cannot factor zero")]
    FactorOfZero,

    /// Range start exceeds range end.
    #[error("invalid range: start {start} exceeds end {end}")]
    EmptyRange {
        /// Requested range start.
        start: u64,
        /// Requested range end.
        end: u64,
    },

    /// A worker count of zero cannot partition anything.
    #[error("worker count must be at least 1")]
    ZeroWorkers,

    /// A worker thread panicked before finishing its chunk.
    #[error("worker thread panicked")]
    WorkerPanicked,
}
