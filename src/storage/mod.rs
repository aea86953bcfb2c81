//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - files(id, name, content)

pub mod schema;
pub mod sqlite;

pub use sqlite::FileStore;
