use crate::areas::repository::Repository;
use crate::artifacts::checkout::restore_plan::RestorePlan;
use crate::artifacts::objects::commit_id::CommitId;
use std::io::Write;

/// Result of a checkout attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Switched(CommitId),
    UnknownCommit,
}

impl std::fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutOutcome::Switched(commit_id) => write!(f, "Switched to commit {commit_id}."),
            CheckoutOutcome::UnknownCommit => write!(f, "Commit does not exist."),
        }
    }
}

impl Repository {
    pub async fn checkout(&mut self, target: Option<&str>) -> anyhow::Result<()> {
        let Some(target) = target else {
            writeln!(self.writer(), "Commit id was not passed.")?;
            return Ok(());
        };

        let outcome = self.restore(target).await?;
        writeln!(self.writer(), "{outcome}")?;

        Ok(())
    }

    /// Overwrite the working files present in the snapshot `target` with its
    /// stored contents. Nested tracked files are matched by base name; working
    /// files missing from the tree are not recreated.
    pub async fn restore(&self, target: &str) -> anyhow::Result<CheckoutOutcome> {
        let Some(commit_id) = self.database().lookup(target) else {
            return Ok(CheckoutOutcome::UnknownCommit);
        };

        let index = self.index();
        let mut index = index.lock().await;

        // Tracked paths decide where nested files are restored
        index.rehydrate()?;

        let mut plan = RestorePlan::new(self, commit_id);
        plan.plan(&index)?;
        let restored = plan.apply()?;

        tracing::info!(commit = %plan.commit_id(), restored, "checked out snapshot");

        Ok(CheckoutOutcome::Switched(plan.commit_id().clone()))
    }
}
