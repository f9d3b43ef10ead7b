use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Show the configured author name, or replace it with `name`
    pub fn config(&self, name: Option<&str>) -> anyhow::Result<()> {
        let name = match name {
            Some(name) => {
                self.config_store().set_user_name(name)?;
                Some(name.trim().to_string())
            }
            None => self.config_store().user_name()?,
        };

        match name {
            Some(name) => writeln!(self.writer(), "The username is {name}.")?,
            None => writeln!(self.writer(), "Please, tell me who you are.")?,
        }

        Ok(())
    }
}
