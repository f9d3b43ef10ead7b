//! Content integrity digest (SHA-256)

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a file's bytes
///
/// Two files are considered identical iff their digests are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn of(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);

        ContentDigest(format!("{:x}", hasher.finalize()))
    }
}
