//! Commit identifier (SHA-1 hash)
//!
//! Commit IDs are 40-character lowercase hexadecimal strings. The natural ID of a
//! commit is the SHA-1 of its message. Since two commits may share a message, the
//! natural ID can already be taken by an existing snapshot; in that case the ID is
//! re-derived by hashing the previous candidate's hex string, until a free one is
//! found.
//!
//! ## Storage
//!
//! Each snapshot lives in `vcs/commits/<commit-id>/`

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use sha1::{Digest, Sha1};

/// Commit identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character lowercase hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated CommitId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid commit ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)) {
            return Err(anyhow::anyhow!("Invalid commit ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Natural (first candidate) ID of a commit with the given message
    pub fn from_message(message: &str) -> Self {
        Self::digest(message.as_bytes())
    }

    /// Next candidate after a collision: the SHA-1 of this ID's hex string
    pub fn rehash(&self) -> Self {
        Self::digest(self.0.as_bytes())
    }

    /// Derive the first collision-free ID for a message.
    ///
    /// Starts from [`CommitId::from_message`] and keeps re-hashing while
    /// `is_taken` reports the candidate as already used. No bound is placed on
    /// the number of retries.
    pub fn allocate<F>(message: &str, mut is_taken: F) -> anyhow::Result<Self>
    where
        F: FnMut(&CommitId) -> anyhow::Result<bool>,
    {
        let mut candidate = Self::from_message(message);

        while is_taken(&candidate)? {
            let next = candidate.rehash();
            tracing::debug!(taken = %candidate, next = %next, "commit id collision");
            candidate = next;
        }

        Ok(candidate)
    }

    /// Get abbreviated form of the commit ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash
    pub fn to_short_id(&self) -> &str {
        &self.0[..7]
    }

    fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);

        Self(format!("{:x}", hasher.finalize()))
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
