//! User identity configuration
//!
//! `vcs/config.txt` holds a single line: the configured author name.

use anyhow::Context;
use std::path::Path;

#[derive(Debug)]
pub struct ConfigStore {
    path: Box<Path>,
}

impl ConfigStore {
    pub fn new(path: Box<Path>) -> Self {
        ConfigStore { path }
    }

    /// The configured author name, if any
    pub fn user_name(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read config file {}", self.path.display()))?;
        let name = content.lines().next().unwrap_or_default().trim();

        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name.to_string()))
        }
    }

    pub fn set_user_name(&self, name: &str) -> anyhow::Result<()> {
        std::fs::write(&self.path, format!("{}\n", name.trim()))
            .with_context(|| format!("Unable to write config file {}", self.path.display()))
    }
}
