use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::commit_id::CommitId;
use std::io::Write;

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(CommitId),
    NothingToCommit,
}

impl std::fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitOutcome::Committed(_) => write!(f, "Changes are committed."),
            CommitOutcome::NothingToCommit => write!(f, "Nothing to commit."),
        }
    }
}

impl Repository {
    pub async fn commit(&mut self, message: Option<&str>) -> anyhow::Result<()> {
        let Some(message) = message else {
            writeln!(self.writer(), "Message was not passed.")?;
            return Ok(());
        };

        let outcome = self.record_commit(message.trim_matches('"')).await?;
        writeln!(self.writer(), "{outcome}")?;

        Ok(())
    }

    /// Snapshot every tracked file if any of them changed since the latest commit.
    ///
    /// All tracked files are read first; an unreadable one aborts the commit
    /// before the store is touched. A snapshot directory is then created,
    /// filled with the copies and recorded in the commit log. A write failure
    /// half way leaves the partial snapshot in place.
    pub async fn record_commit(&self, message: &str) -> anyhow::Result<CommitOutcome> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let status = self.change_detector().inspect(&index)?;
        if !status.requires_commit() {
            tracing::debug!(?status, "skipping commit");
            return Ok(CommitOutcome::NothingToCommit);
        }

        // Read every working copy before touching the store
        let mut copies = Vec::new();
        for path in index.entries() {
            let Some(file_name) = path.file_name() else {
                anyhow::bail!("Tracked path has no file name: {}", path.display());
            };

            copies.push((file_name, self.workspace().read_file(path)?));
        }

        let commit_id = self.database().create_snapshot(message)?;
        for (file_name, data) in &copies {
            self.database().store_file(&commit_id, file_name, data)?;
        }

        let author = self.config_store().user_name()?.unwrap_or_default();
        self.commit_log()
            .append(&LogEntry::new(commit_id.clone(), author, message.to_string()))?;

        tracing::info!(commit = %commit_id.to_short_id(), "created snapshot");

        Ok(CommitOutcome::Committed(commit_id))
    }
}
