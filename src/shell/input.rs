//! Line sources for the shell: an interactive editor, an interrupt-aware
//! wrapper that reads on its own thread, and a scripted reader

use crate::{Error, Result};
use crossbeam::channel::{self, Receiver, Sender};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::thread;

/// What a single prompt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The user pressed Ctrl-C
    Interrupted,
    /// No more input will ever arrive (Ctrl-D, closed stdin)
    Eof,
}

pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Interactive reader backed by rustyline, with in-session history
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| Error::Input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(Error::Input(e.to_string())),
        }
    }
}

/// Route Ctrl-C (SIGINT) into a channel instead of letting it kill the process
pub fn interrupt_channel() -> Result<Receiver<()>> {
    let (tx, rx) = channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = tx.try_send(());
    })?;
    Ok(rx)
}

/// Reads on a background thread so a pending prompt can be abandoned when
/// an interrupt arrives, whether or not stdin is a terminal.
pub struct InterruptibleReader {
    requests: Sender<String>,
    replies: Receiver<Result<ReadOutcome>>,
    interrupts: Receiver<()>,
}

impl InterruptibleReader {
    /// The inner reader is built on the reading thread
    pub fn spawn<R, F>(make_reader: F, interrupts: Receiver<()>) -> Self
    where
        R: LineReader,
        F: FnOnce() -> Result<R> + Send + 'static,
    {
        let (requests, prompts) = channel::unbounded::<String>();
        let (reply_tx, replies) = channel::unbounded();

        thread::spawn(move || {
            let mut reader = match make_reader() {
                Ok(reader) => reader,
                Err(e) => {
                    let _ = reply_tx.send(Err(e));
                    return;
                }
            };
            for prompt in prompts {
                if reply_tx.send(reader.read_line(&prompt)).is_err() {
                    break;
                }
            }
        });

        Self {
            requests,
            replies,
            interrupts,
        }
    }

    fn await_reply(&self) -> Result<ReadOutcome> {
        // A gone reading thread means nothing more can be read
        self.replies.recv().unwrap_or(Ok(ReadOutcome::Eof))
    }
}

impl LineReader for InterruptibleReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        // Interrupts raised while a command was running win over new input
        if self.interrupts.try_recv().is_ok() {
            return Ok(ReadOutcome::Interrupted);
        }

        let _ = self.requests.send(prompt.to_string());
        channel::select! {
            recv(self.interrupts) -> signal => match signal {
                Ok(()) => Ok(ReadOutcome::Interrupted),
                Err(_) => self.await_reply(),
            },
            recv(self.replies) -> reply => reply.unwrap_or(Ok(ReadOutcome::Eof)),
        }
    }
}

/// Replays a fixed list of lines, then reports an interrupt (or end of input).
///
/// Every prompt shown is recorded so callers can check the dialogue.
#[derive(Debug)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    end: ReadOutcome,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            end: ReadOutcome::Interrupted,
        }
    }

    /// Report end of input instead of an interrupt once the lines run out
    pub fn ending_with_eof(mut self) -> Self {
        self.end = ReadOutcome::Eof;
        self
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self.prompts.push(prompt.to_string());
        Ok(match self.lines.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => self.end.clone(),
        })
    }
}
