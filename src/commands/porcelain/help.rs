use crate::areas::repository::Repository;
use std::io::Write;

/// Command names and their one-line summaries, in display order
pub const COMMANDS: [(&str, &str); 5] = [
    ("config", "Get and set a username."),
    ("add", "Add a file to the index."),
    ("log", "Show commit logs."),
    ("commit", "Save changes."),
    ("checkout", "Restore a file."),
];

impl Repository {
    pub fn help(&self) -> anyhow::Result<()> {
        writeln!(self.writer(), "These are SVCS commands:")?;
        for (name, summary) in COMMANDS {
            writeln!(self.writer(), "{name:<11}{summary}")?;
        }

        Ok(())
    }

    pub fn unknown_command(&self, name: &str) -> anyhow::Result<()> {
        writeln!(self.writer(), "'{name}' is not a SVCS command.")?;

        Ok(())
    }
}
