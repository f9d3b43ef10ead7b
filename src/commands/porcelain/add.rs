use crate::areas::index::INDEX_HEADER;
use crate::areas::repository::Repository;
use std::io::Write;

/// Result of trying to track a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Tracked(String),
    NotFound(String),
}

impl std::fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOutcome::Tracked(path) => write!(f, "The file '{path}' is tracked."),
            AddOutcome::NotFound(path) => write!(f, "Can't find '{path}'."),
        }
    }
}

impl Repository {
    pub async fn add(&mut self, path: Option<&str>) -> anyhow::Result<()> {
        match path {
            Some(path) => {
                let outcome = self.track(path).await?;
                writeln!(self.writer(), "{outcome}")?;
            }
            None => self.list_tracked().await?,
        }

        Ok(())
    }

    /// Add a path to the index unless it is already tracked.
    ///
    /// The path must name a regular file under the working root; otherwise the
    /// index is left untouched. The index file is only rewritten when a new path
    /// was added.
    pub async fn track(&self, raw_path: &str) -> anyhow::Result<AddOutcome> {
        let Some(path) = self.workspace().resolve_file(raw_path) else {
            return Ok(AddOutcome::NotFound(raw_path.to_string()));
        };

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        if index.add(path.clone()) {
            tracing::info!(path = %path.display(), "tracking file");
        }
        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(AddOutcome::Tracked(raw_path.to_string()))
    }

    pub async fn list_tracked(&self) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "Add a file to the index.")?;
            return Ok(());
        }

        writeln!(self.writer(), "{INDEX_HEADER}")?;
        for path in index.entries() {
            writeln!(self.writer(), "{}", path.display())?;
        }

        Ok(())
    }
}
