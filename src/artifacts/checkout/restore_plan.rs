use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use std::path::PathBuf;

/// Action planned for one working file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreAction {
    /// Truncate the working file and write the stored bytes
    Overwrite,
    /// The working file does not exist; leave it absent
    SkipMissing,
}

/// One snapshot file and the working file it restores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreStep {
    /// Base name of the file inside the snapshot
    pub stored: PathBuf,
    /// Working-root-relative destination
    pub target: PathBuf,
    pub action: RestoreAction,
}

/// Restore planner and executor for a single snapshot
pub struct RestorePlan<'r> {
    repository: &'r Repository,
    commit_id: CommitId,
    /// Planned steps, in snapshot listing order
    steps: Vec<RestoreStep>,
}

impl<'r> RestorePlan<'r> {
    pub fn new(repository: &'r Repository, commit_id: CommitId) -> Self {
        Self {
            repository,
            commit_id,
            steps: Vec::new(),
        }
    }

    pub fn commit_id(&self) -> &CommitId {
        &self.commit_id
    }

    pub fn steps(&self) -> &[RestoreStep] {
        &self.steps
    }

    /// Map every snapshot file to its working destinations.
    ///
    /// Snapshots are flat, so a stored file restores every tracked path sharing
    /// its base name. A stored file no tracked path claims goes to the working
    /// root under the same name.
    pub fn plan(&mut self, index: &Index) -> anyhow::Result<()> {
        let mut steps = Vec::new();

        for stored in self
            .repository
            .database()
            .snapshot_files(&self.commit_id)?
        {
            let mut targets = index
                .entries()
                .filter(|tracked| tracked.file_name() == Some(stored.as_os_str()))
                .map(PathBuf::from)
                .collect::<Vec<_>>();
            if targets.is_empty() {
                targets.push(stored.clone());
            }

            for target in targets {
                let action = if self.repository.workspace().contains_file(&target) {
                    RestoreAction::Overwrite
                } else {
                    RestoreAction::SkipMissing
                };

                steps.push(RestoreStep {
                    stored: stored.clone(),
                    target,
                    action,
                });
            }
        }

        self.steps = steps;

        Ok(())
    }

    /// Apply the planned steps
    ///
    /// # Returns
    ///
    /// The number of working files that were overwritten
    pub fn apply(&self) -> anyhow::Result<usize> {
        let snapshot_path = self.repository.database().snapshot_path(&self.commit_id);
        let mut restored = 0;

        for step in &self.steps {
            match step.action {
                RestoreAction::Overwrite => {
                    let data = self
                        .repository
                        .database()
                        .read_snapshot_file(&snapshot_path.join(&step.stored))?;

                    if self.repository.workspace().overwrite_file(&step.target, &data)? {
                        restored += 1;
                    }
                }
                RestoreAction::SkipMissing => {
                    tracing::warn!(
                        file = %step.target.display(),
                        commit = %self.commit_id,
                        "not restoring file absent from the working tree"
                    );
                }
            }
        }

        Ok(restored)
    }
}
