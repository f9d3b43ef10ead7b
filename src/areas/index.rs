//! Tracked-file index
//!
//! The index is the ordered set of working-root-relative paths included in
//! every snapshot. Paths are only ever appended; there is no removal.
//!
//! ## Index File Format
//!
//! Plain text, `vcs/index.txt`:
//! ```text
//! Tracked files:
//! a.txt
//! docs/notes.md
//! ```
//! A header line followed by one path per line, in the order they were added.
//! Header lines and blank lines are skipped on load.

use anyhow::Context;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Header line written at the top of the index file
pub const INDEX_HEADER: &str = "Tracked files:";

/// Tracked-file index
///
/// Loaded from disk with [`Index::rehydrate`] before every use and persisted
/// with [`Index::write_updates`]. Nothing is cached across invocations.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `vcs/index.txt`)
    path: Box<Path>,
    /// Tracked paths in insertion order, without duplicates
    entries: Vec<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.changed = false;
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file yields an empty index.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.clear();

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        content
            .lines()
            .filter(|line| !line.is_empty() && *line != INDEX_HEADER)
            .for_each(|line| {
                self.store_entry(PathBuf::from(line));
            });

        Ok(())
    }

    fn store_entry(&mut self, path: PathBuf) -> bool {
        if self.is_tracked(&path) {
            return false;
        }

        self.entries.push(path);
        true
    }

    /// Track a path
    ///
    /// # Returns
    ///
    /// true if the path was not tracked before
    pub fn add(&mut self, path: PathBuf) -> bool {
        let added = self.store_entry(path);
        self.changed |= added;

        added
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Persist the index, header first
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut content = format!("{INDEX_HEADER}\n");
        for entry in &self.entries {
            content.push_str(&entry.to_string_lossy());
            content.push('\n');
        }

        lock.deref_mut()
            .write_all(content.as_bytes())
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;
        self.changed = false;

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}
