//! I/O helpers: configuration and source file access.

pub mod config;
pub mod source_file;
