//! Commit store
//!
//! Every commit is a directory `vcs/commits/<commit-id>/` holding flat copies of
//! the tracked files, keyed by base filename. Snapshots are created once and
//! never modified or removed afterwards.

use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use bytes::Bytes;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.as_ref())
    }

    pub fn contains(&self, commit_id: &CommitId) -> bool {
        self.snapshot_path(commit_id).is_dir()
    }

    /// Resolve a user-supplied commit ID to an existing snapshot
    pub fn lookup(&self, raw_id: &str) -> Option<CommitId> {
        CommitId::try_parse(raw_id.to_string())
            .ok()
            .filter(|commit_id| self.contains(commit_id))
    }

    /// All snapshot IDs, sorted by name
    pub fn snapshot_ids(&self) -> anyhow::Result<Vec<CommitId>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut ids = std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to list commits in {}", self.path.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter_map(|name| CommitId::try_parse(name).ok())
            .collect::<Vec<_>>();
        ids.sort();

        Ok(ids)
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.snapshot_ids()?.is_empty())
    }

    /// Lexicographically-last snapshot name.
    ///
    /// Directory names are SHA-1 digests, so this is not creation order. Callers
    /// wanting the most recent commit should go through the commit log first.
    pub fn latest_by_name(&self) -> anyhow::Result<Option<CommitId>> {
        Ok(self.snapshot_ids()?.pop())
    }

    /// Create an empty snapshot directory under the first free ID for `message`
    pub fn create_snapshot(&self, message: &str) -> anyhow::Result<CommitId> {
        let commit_id = CommitId::allocate(message, |candidate| Ok(self.contains(candidate)))?;
        let snapshot_path = self.snapshot_path(&commit_id);

        std::fs::create_dir(&snapshot_path).context(format!(
            "Unable to create snapshot directory {}",
            snapshot_path.display()
        ))?;

        Ok(commit_id)
    }

    pub fn store_file(
        &self,
        commit_id: &CommitId,
        file_name: &OsStr,
        data: &[u8],
    ) -> anyhow::Result<()> {
        let file_path = self.snapshot_path(commit_id).join(file_name);

        std::fs::write(&file_path, data).context(format!(
            "Unable to write snapshot file {}",
            file_path.display()
        ))
    }

    /// Files stored directly in a snapshot, sorted by name
    pub fn snapshot_files(&self, commit_id: &CommitId) -> anyhow::Result<Vec<PathBuf>> {
        let snapshot_path = self.snapshot_path(commit_id);

        let mut files = std::fs::read_dir(&snapshot_path)
            .context(format!("Unable to list snapshot {}", snapshot_path.display()))?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|path| path.is_file())
            .filter_map(|path| path.file_name().map(PathBuf::from))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    /// Locate a file by base name anywhere inside a snapshot
    pub fn find_in_snapshot(
        &self,
        commit_id: &CommitId,
        file_name: &OsStr,
    ) -> anyhow::Result<Option<PathBuf>> {
        for entry in WalkDir::new(self.snapshot_path(commit_id)).sort_by_file_name() {
            let entry = entry?;

            if entry.file_type().is_file() && entry.file_name() == file_name {
                return Ok(Some(entry.into_path()));
            }
        }

        Ok(None)
    }

    pub fn read_snapshot_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let content = std::fs::read(file_path).context(format!(
            "Unable to read snapshot file {}",
            file_path.display()
        ))?;

        Ok(content.into())
    }
}
