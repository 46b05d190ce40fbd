//! Error handling and exit codes.

use ntcalc_core::exit_codes;
use ntcalc_core::NtError;

/// Map a library error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &NtError) -> i32 {
    match err {
        NtError::ZeroModulus
        | NtError::NotInvertible { .. }
        | NtError::FactorOfZero
        | NtError::EmptyRange { .. }
        | NtError::ZeroWorkers => exit_codes::ERROR_CONFIG,
        NtError::WorkerPanicked => exit_codes::ERROR_GENERIC,
    }
}

/// Resolve the exit code for a top-level failure.
///
/// Domain errors keep their dedicated code; anything else maps to the
/// generic failure code.
#[must_use]
pub fn resolve_exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<NtError>()
        .map_or(exit_codes::ERROR_GENERIC, exit_code_for)
}
