//! Commit history records
//!
//! - `log_entry`: a single `(commit id, author, message)` record, its on-disk
//!   line format and its rendering for the `log` command

pub mod log_entry;
