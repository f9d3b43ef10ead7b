use crate::areas::commit_log::CommitLog;
use crate::areas::config::ConfigStore;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::change_detector::ChangeDetector;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the storage directory under the working root
pub const STORAGE_DIR: &str = "vcs";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    commit_log: CommitLog,
    workspace: Workspace,
    config: ConfigStore,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the storage layout if needed
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create working root {}", path.display()))?;
        }
        let path = path.canonicalize()?;
        let storage = path.join(STORAGE_DIR);

        let index = Index::new(storage.join("index.txt").into_boxed_path());
        let database = Database::new(storage.join("commits").into_boxed_path());
        let commit_log = CommitLog::new(storage.join("log.txt").into_boxed_path());
        let config = ConfigStore::new(storage.join("config.txt").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        let repository = Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            commit_log,
            workspace,
            config,
        };
        repository.bootstrap()?;

        Ok(repository)
    }

    fn bootstrap(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.database.commits_path()).with_context(|| {
            format!(
                "Unable to create commits directory {}",
                self.database.commits_path().display()
            )
        })?;

        self.commit_log.touch()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn commit_log(&self) -> &CommitLog {
        &self.commit_log
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.config
    }

    pub fn change_detector(&'_ self) -> ChangeDetector<'_> {
        ChangeDetector::new(self)
    }

    /// Most recent snapshot.
    ///
    /// The last log entry that still names an existing snapshot wins. If the log
    /// has none, the lexicographically-last snapshot directory is used instead.
    pub fn latest_commit(&self) -> anyhow::Result<Option<CommitId>> {
        let latest_logged = self
            .commit_log
            .entries()?
            .into_iter()
            .rev()
            .map(|entry| entry.id().clone())
            .find(|commit_id| self.database.contains(commit_id));

        match latest_logged {
            Some(commit_id) => Ok(Some(commit_id)),
            None => self.database.latest_by_name(),
        }
    }
}
