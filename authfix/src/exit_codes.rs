//! Stable exit codes for the authfix CLI.

/// All fixes ran. Says nothing about how many patterns matched.
pub const OK: i32 = 0;
/// A target or config file could not be read, parsed or written.
pub const INVALID: i32 = 1;
