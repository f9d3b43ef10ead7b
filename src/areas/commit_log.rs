//! Commit log
//!
//! Append-only record of every commit, oldest first, in `vcs/log.txt`. Each line
//! is a serialized [`LogEntry`]. Presentation order (most recent first) is the
//! caller's concern; the file itself is never rewritten.

use crate::artifacts::log::log_entry::LogEntry;
use anyhow::Context;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug)]
pub struct CommitLog {
    path: Box<Path>,
}

impl CommitLog {
    pub fn new(path: Box<Path>) -> Self {
        CommitLog { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log file if it does not exist yet
    pub fn touch(&self) -> anyhow::Result<()> {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())
            .with_context(|| format!("Unable to create commit log {}", self.path.display()))?;

        Ok(())
    }

    /// Append one entry at the end of the log
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the log file during writing.
    pub fn append(&self, entry: &LogEntry) -> anyhow::Result<()> {
        let mut log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())
            .with_context(|| format!("Unable to open commit log {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut log_file, file_guard::Lock::Exclusive, 0, 1)?;

        writeln!(lock.deref_mut(), "{}", entry.to_line())
            .with_context(|| format!("Unable to append to commit log {}", self.path.display()))
    }

    /// All entries in file order (oldest first)
    ///
    /// Lines that cannot be parsed are skipped with a warning.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the log file during reading.
    pub fn entries(&self) -> anyhow::Result<Vec<LogEntry>> {
        if !self.path().exists() {
            return Ok(Vec::new());
        }

        let mut log_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open commit log {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut log_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("Unable to read commit log {}", self.path.display()))?;

        let entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match LogEntry::parse_line(line) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable commit log line");
                    None
                }
            })
            .collect();

        Ok(entries)
    }
}
