//! Pure text transformation logic.
//!
//! Core modules are free of I/O. They operate on in-memory buffers and
//! return deterministic outputs suitable for tests.

pub mod fixes;
pub mod rewrite;
