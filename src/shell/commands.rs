//! Named shell actions and the table that maps names to them

use super::Session;
use crate::{Error, Result};
use std::path::Path;

/// An action the shell can run; all input and output goes through the session
pub type Handler = fn(&mut Session<'_>) -> Result<()>;

/// Fixed vocabulary of commands, built once per shell
pub struct CommandTable {
    entries: Vec<(&'static str, Handler)>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self {
            entries: vec![
                ("help", help as Handler),
                ("?", help as Handler),
                ("add", add_file as Handler),
                ("remove", remove_file as Handler),
                ("show", show as Handler),
                ("write", write_file as Handler),
            ],
        }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, handler)| *handler)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

fn help(session: &mut Session<'_>) -> Result<()> {
    let names = session.commands.names().join(", ");
    writeln!(session.out, "Current commands are:\n---\n{}\n---", names)?;
    Ok(())
}

fn add_file(session: &mut Session<'_>) -> Result<()> {
    let name = session.prompt("Enter a file to add:")?;
    let path = Path::new(&name);
    if !path.exists() {
        return Err(Error::NotFound("File doesn't exist".to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let id = session.store.insert(&name, &content)?;
    tracing::info!(id, name = %name, "Added file");
    session.palette.success(session.out, &format!("Added file {}", name))?;
    Ok(())
}

fn remove_file(session: &mut Session<'_>) -> Result<()> {
    let id = session.prompt_id("Enter a file id to remove:")?;
    if !session.store.exists(id)? {
        return Err(Error::NotFound("Incorrect row".to_string()));
    }

    session.store.delete(id)?;
    tracing::info!(id, "Removed file");
    session.palette.success(session.out, &format!("Deleted {}", id))?;
    Ok(())
}

fn show(session: &mut Session<'_>) -> Result<()> {
    let records = session.store.fetch_all()?;
    session.display.clear_rows();
    for record in &records {
        session.display.add_record(record);
    }
    writeln!(session.out, "{}", session.display.build())?;
    Ok(())
}

fn write_file(session: &mut Session<'_>) -> Result<()> {
    let id = session.prompt_id("Enter file id:")?;
    let destination = session.prompt("Enter file path:")?;
    if !session.store.exists(id)? {
        return Err(Error::NotFound("Incorrect id".to_string()));
    }

    // The record may still disappear between the check and the read
    let Some(content) = session.store.fetch_content(id)? else {
        return Err(Error::NotFound("Incorrect id".to_string()));
    };

    std::fs::write(&destination, content)?;
    tracing::info!(id, destination = %destination, "Wrote file");
    session.palette.success(session.out, "Written to a file")?;
    Ok(())
}
