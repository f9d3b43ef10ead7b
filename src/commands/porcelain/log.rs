use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use std::io::Write;

impl Repository {
    pub fn log(&self) -> anyhow::Result<()> {
        let Some(entries) = self.history()? else {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        };

        for entry in &entries {
            writeln!(self.writer(), "{entry}")?;
            writeln!(self.writer())?;
        }

        Ok(())
    }

    /// Commit log entries, most recent first.
    ///
    /// None when the commit store holds no snapshot at all; the log file is not
    /// read in that case, whatever it contains.
    pub fn history(&self) -> anyhow::Result<Option<Vec<LogEntry>>> {
        if self.database().is_empty()? {
            return Ok(None);
        }

        let mut entries = self.commit_log().entries()?;
        entries.reverse();

        Ok(Some(entries))
    }
}
