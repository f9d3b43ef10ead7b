use crate::areas::repository::STORAGE_DIR;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 1] = [STORAGE_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve a user-supplied path to a regular file under the working root.
    ///
    /// Returns the path relative to the root, or None if it does not name an
    /// existing regular file inside the root (storage directory excluded).
    pub fn resolve_file(&self, raw_path: &str) -> Option<PathBuf> {
        let candidate = Path::new(raw_path);
        let absolute = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.path.join(candidate)
        };

        if !absolute.is_file() {
            return None;
        }

        let relative = absolute
            .canonicalize()
            .ok()?
            .strip_prefix(self.path.as_ref())
            .ok()?
            .to_path_buf();

        if Self::is_ignored(&relative) {
            return None;
        }

        Some(relative)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().next().is_some_and(|component| {
            if let std::path::Component::Normal(name) = component {
                IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
            } else {
                false
            }
        })
    }

    pub fn contains_file(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))
            .with_context(|| format!("Failed to read tracked file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Truncate and rewrite an existing file.
    ///
    /// Missing files are not created; returns false when the file was absent.
    pub fn overwrite_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<bool> {
        let path = self.path.join(file_path);

        if !path.is_file() {
            return Ok(false);
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(true)
    }
}
