//! # Filestash - file contents kept in a SQLite table
//!
//! Filestash provides:
//! - A single-table SQLite store of file records (id, name, content)
//! - An interactive shell to add, remove, show and write out stored files
//! - Themed terminal output with a bordered record table

pub mod record;
pub mod storage;
pub mod shell;
pub mod ui;
pub mod config;

// Re-exports for convenient access
pub use record::{Field, FileRecord};
pub use storage::FileStore;
pub use shell::{CommandTable, Shell};

/// Result type alias for Filestash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Filestash operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// User input that could not be accepted (bad integer, bad name)
    #[error("{0}")]
    Validation(String),

    /// A record id or filesystem path that does not exist
    #[error("{0}")]
    NotFound(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Signal error: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Interrupted")]
    Interrupted,

    #[error("End of input")]
    EndOfInput,
}

impl Error {
    /// Whether this error ends the shell rather than being reported
    pub fn is_termination(&self) -> bool {
        matches!(self, Error::Interrupted | Error::EndOfInput)
    }

    /// Mistakes in what the user typed, as opposed to failures of the system
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}
