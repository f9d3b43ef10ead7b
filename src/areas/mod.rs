//! Core repository components
//!
//! This module contains the persisted areas of a repository, all living under
//! the `vcs` storage directory:
//!
//! - `commit_log`: Append-only history of commits (`log.txt`)
//! - `config`: Configured author name (`config.txt`)
//! - `database`: Commit store, one snapshot directory per commit (`commits/`)
//! - `index`: Tracked-file index (`index.txt`)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub(crate) mod commit_log;
pub(crate) mod config;
pub(crate) mod database;
pub(crate) mod index;
pub mod repository;
pub(crate) mod workspace;
