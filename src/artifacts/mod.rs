//! Data structures and algorithms
//!
//! - `checkout`: Restoring a snapshot into the working tree
//! - `log`: Commit log entries
//! - `objects`: Commit identifiers and content digests
//! - `status`: Change detection against the latest snapshot

pub mod checkout;
pub mod log;
pub mod objects;
pub mod status;
