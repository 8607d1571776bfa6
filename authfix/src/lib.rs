//! Text patches for Bug #11: move login and API auth from JWT to sessions.
//!
//! The fixes are plain textual rewrites of two TypeScript sources:
//!
//! - **[`core`]**: Pure rewrite logic and the hard-coded fix set. No I/O.
//! - **[`io`]**: Config loading and whole-file read/overwrite.
//!
//! [`apply`] runs the fixes in order and prints progress.

pub mod apply;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
