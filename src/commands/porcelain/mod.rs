//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `config`: Get or set the author name
//! - `add`: Track a file, or list tracked files
//! - `log`: Show commit history, most recent first
//! - `commit`: Snapshot the tracked files if anything changed
//! - `checkout`: Restore the files of a snapshot
//! - `help`: Command overview and unknown command reporting

pub mod add;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod help;
pub mod log;
