//! A minimal local version control system.
//!
//! Tracks a set of files in a working directory, records snapshots of their
//! contents under operator-supplied messages and restores prior snapshots.
//! All state lives in a `vcs` directory under the working root and is read
//! fresh on every invocation.

pub mod areas;
pub mod artifacts;
pub mod commands;
