//! Workspace-level integration tests for NTCalc-rs.
//!
//! The golden tests live in `tests/`; this library target is empty.
