//! File records and the closed set of updatable columns

use crate::{Error, Result};
use std::str::FromStr;

/// One stored file: the path it was read from and its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Assigned by the store, never reused
    pub id: i64,
    /// Path the content was read from (a label, not a live link)
    pub name: String,
    /// Text of the file at the time it was added
    pub content: String,
}

/// Columns of the `files` table that may be updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Content,
}

impl Field {
    /// Column name in the `files` table
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Content => "content",
        }
    }

    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Content]
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "content" | "data" => Ok(Field::Content),
            _ => Err(Error::Validation(format!("Unknown field: {}", s))),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
