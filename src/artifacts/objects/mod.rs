//! Identifiers and digests
//!
//! Two hashing schemes are in play:
//!
//! - **CommitId**: SHA-1 of the commit message, hex-encoded. Re-derived from its
//!   own hex string whenever it collides with an existing snapshot.
//! - **ContentDigest**: SHA-256 of file bytes, used only to decide whether a
//!   working file differs from its committed copy.

pub mod commit_id;
pub mod content_digest;

/// Length of a SHA-1 hash in hexadecimal format
pub const COMMIT_ID_LENGTH: usize = 40;
