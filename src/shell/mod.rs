//! Interactive shell
//!
//! Reads a command name, looks it up in the [`CommandTable`] and runs the
//! matching handler against the store. Unknown input is ignored. The loop
//! only ends on an interrupt (or end of input), after which the store is
//! closed.

pub mod commands;
pub mod input;

pub use commands::{CommandTable, Handler};
pub use input::{
    interrupt_channel, EditorReader, InterruptibleReader, LineReader, ReadOutcome, ScriptedReader,
};

use crate::storage::FileStore;
use crate::ui::{Palette, RecordTable};
use crate::{Error, Result};
use std::io::Write;

pub const COMMAND_PROMPT: &str = "Enter command:";

/// Everything a handler may touch while it runs
pub struct Session<'a> {
    pub store: &'a FileStore,
    pub commands: &'a CommandTable,
    pub display: &'a mut RecordTable,
    pub palette: &'a Palette,
    pub out: &'a mut dyn Write,
    reader: &'a mut dyn LineReader,
}

impl Session<'_> {
    /// Ask for a line, trimmed. Interrupts surface as errors so they unwind to the loop.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        read_trimmed(self.reader, text)
    }

    /// Ask for a record id
    pub fn prompt_id(&mut self, text: &str) -> Result<i64> {
        let line = self.prompt(text)?;
        line.parse::<i64>()
            .map_err(|e| Error::Validation(format!("Couldn't get the number: {}", e)))
    }
}

fn read_trimmed(reader: &mut dyn LineReader, text: &str) -> Result<String> {
    match reader.read_line(text)? {
        ReadOutcome::Line(line) => Ok(line.trim().to_string()),
        ReadOutcome::Interrupted => Err(Error::Interrupted),
        ReadOutcome::Eof => Err(Error::EndOfInput),
    }
}

pub struct Shell {
    store: FileStore,
    commands: CommandTable,
    display: RecordTable,
    palette: Palette,
}

impl Shell {
    pub fn new(store: FileStore) -> Self {
        Self {
            store,
            commands: CommandTable::new(),
            display: RecordTable::new(),
            palette: Palette::plain(),
        }
    }

    /// Styles for status lines; callers pick colour from what `out` will be
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Run until interrupted, then close the store.
    pub fn run(mut self, reader: &mut dyn LineReader, out: &mut dyn Write) -> Result<()> {
        loop {
            match self.run_once(reader, out) {
                Ok(()) => {}
                Err(e) if e.is_termination() => {
                    tracing::debug!("Shell terminated: {}", e);
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(out, "Exiting...")?;
        self.store.close()
    }

    /// Read and run one command.
    ///
    /// Recoverable failures are printed and swallowed; only termination
    /// signals and failures to write output are returned.
    pub fn run_once(&mut self, reader: &mut dyn LineReader, out: &mut dyn Write) -> Result<()> {
        match self.dispatch(reader, out) {
            Err(e) if !e.is_termination() => {
                // The printed line is all the user needs for their own mistakes
                if e.is_user_error() {
                    tracing::debug!("Command rejected: {}", e);
                } else {
                    tracing::warn!("Command failed: {}", e);
                }
                self.palette.error(out, &e.to_string())?;
                Ok(())
            }
            other => other,
        }
    }

    fn dispatch(&mut self, reader: &mut dyn LineReader, out: &mut dyn Write) -> Result<()> {
        let command = read_trimmed(reader, COMMAND_PROMPT)?;
        let Some(handler) = self.commands.get(&command) else {
            tracing::trace!("Ignoring unknown command {:?}", command);
            return Ok(());
        };

        let mut session = Session {
            store: &self.store,
            commands: &self.commands,
            display: &mut self.display,
            palette: &self.palette,
            out,
            reader,
        };
        handler(&mut session)
    }
}
