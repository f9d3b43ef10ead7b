use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::content_digest::ContentDigest;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Outcome of comparing the tracked files against the latest snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeStatus {
    /// The index is empty
    NothingTracked,
    /// Files are tracked but nothing was ever committed
    NoSnapshot,
    /// The first tracked file (in index order) whose content differs
    Changed(PathBuf),
    /// Every tracked file found in the latest snapshot is identical
    Unchanged,
}

impl ChangeStatus {
    pub fn requires_commit(&self) -> bool {
        matches!(self, ChangeStatus::NoSnapshot | ChangeStatus::Changed(_))
    }
}

#[derive(new)]
pub struct ChangeDetector<'r> {
    repository: &'r Repository,
}

impl<'r> ChangeDetector<'r> {
    pub fn inspect(&self, index: &Index) -> anyhow::Result<ChangeStatus> {
        if index.is_empty() {
            return Ok(ChangeStatus::NothingTracked);
        }

        let Some(latest) = self.repository.latest_commit()? else {
            return Ok(ChangeStatus::NoSnapshot);
        };

        for tracked in index.entries() {
            if self.is_content_changed(&latest, tracked)? {
                tracing::debug!(path = %tracked.display(), snapshot = %latest, "content changed");
                return Ok(ChangeStatus::Changed(tracked.to_path_buf()));
            }
        }

        Ok(ChangeStatus::Unchanged)
    }

    // Only files with a same-named counterpart in the snapshot are compared; a
    // tracked file missing from the snapshot does not count as a change.
    fn is_content_changed(&self, snapshot: &CommitId, tracked: &Path) -> anyhow::Result<bool> {
        let Some(file_name) = tracked.file_name() else {
            return Ok(false);
        };

        let Some(stored) = self
            .repository
            .database()
            .find_in_snapshot(snapshot, file_name)?
        else {
            return Ok(false);
        };

        let working = ContentDigest::of(&self.repository.workspace().read_file(tracked)?);
        let committed = ContentDigest::of(&self.repository.database().read_snapshot_file(&stored)?);

        Ok(working != committed)
    }
}
