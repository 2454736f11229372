//! Filesystem output for encoded icons.

/// Directory creation, icon naming and atomic writes.
pub mod fs;
