//! Command implementations
//!
//! - `porcelain`: User-facing commands (config, add, log, commit, checkout)
//!
//! Each command is an `impl Repository` block that reports to the repository's
//! writer. User mistakes end up as messages on that writer; only I/O failures
//! are returned as errors.

pub mod porcelain;
