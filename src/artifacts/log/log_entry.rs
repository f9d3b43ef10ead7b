//! Commit log entry
//!
//! ## Format
//!
//! On disk, one line per commit, fields separated by a single space:
//! ```text
//! <commit-id> <author> <message>
//! ```
//! The message is the remainder of the line and may itself contain spaces, so
//! the author is written as a single token (inner whitespace becomes `_`).
//! An unconfigured author is the empty token, which leaves two consecutive
//! spaces after the ID.
//!
//! Rendered by `log`:
//! ```text
//! commit <commit-id>
//! Author: <author>
//! <message>
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    id: CommitId,
    author: String,
    message: String,
}

impl LogEntry {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_line(&self) -> String {
        let author = self.author.split_whitespace().collect::<Vec<_>>().join("_");
        let message = self.message.lines().collect::<Vec<_>>().join(" ");

        format!("{} {} {}", self.id, author, message)
    }

    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let mut fields = line.splitn(3, ' ');

        let id = fields
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing commit id in log line: {line:?}"))?;
        let id = CommitId::try_parse(id.to_string())
            .with_context(|| format!("Malformed log line: {line:?}"))?;
        let author = fields.next().unwrap_or_default().to_string();
        let message = fields.next().unwrap_or_default().to_string();

        Ok(LogEntry::new(id, author, message))
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "commit {}", self.id)?;
        writeln!(f, "Author: {}", self.author)?;
        write!(f, "{}", self.message)
    }
}
