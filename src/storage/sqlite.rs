//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::{Result, Error};
use crate::record::{Field, FileRecord};
use super::schema;

/// SQLite-backed store of file records
pub struct FileStore {
    conn: Connection,
}

impl FileStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::debug!("Opened file store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema, reusing an existing table unchanged
    fn initialize_schema(&self) -> Result<()> {
        let had_table: bool = self.conn.query_row(
            schema::FILES_TABLE_EXISTS,
            [schema::FILES_TABLE],
            |row| row.get(0),
        )?;

        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }

        if !had_table {
            tracing::info!("Created table {}", schema::FILES_TABLE);
        }
        Ok(())
    }

    /// Check whether a record with this id is present
    pub fn exists(&self, id: i64) -> Result<bool> {
        let exists: bool = self.conn.query_row(schema::FILE_EXISTS, [id], |row| row.get(0))?;
        Ok(exists)
    }

    /// Append a new record, returning its assigned id
    pub fn insert(&self, name: &str, content: &str) -> Result<i64> {
        self.conn.execute(schema::INSERT_FILE, params![name, content])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, "Inserted file record");
        Ok(id)
    }

    /// Remove the record with this id.
    ///
    /// Callers check [`FileStore::exists`] first; a record that vanished in
    /// between is reported as `NotFound`.
    pub fn delete(&self, id: i64) -> Result<()> {
        let removed = self.conn.execute(schema::DELETE_FILE, [id])?;
        if removed == 0 {
            return Err(Error::NotFound(format!("No file with id {}", id)));
        }
        tracing::debug!(id, "Deleted file record");
        Ok(())
    }

    /// Every record, in id order
    pub fn fetch_all(&self) -> Result<Vec<FileRecord>> {
        let mut stmt = self.conn.prepare(schema::SELECT_ALL_FILES)?;

        let records = stmt
            .query_map([], |row| self.row_to_record(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Content of the record with this id, `None` if there is no such record
    pub fn fetch_content(&self, id: i64) -> Result<Option<String>> {
        self.conn
            .query_row(schema::SELECT_CONTENT, [id], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    /// Update a single column of a single record
    pub fn update_field(&self, id: i64, field: Field, value: &str) -> Result<()> {
        let sql = match field {
            Field::Name => schema::UPDATE_NAME,
            Field::Content => schema::UPDATE_CONTENT,
        };

        let changed = self.conn.execute(sql, params![value, id])?;
        if changed == 0 {
            return Err(Error::NotFound(format!("No file with id {}", id)));
        }
        tracing::debug!(id, %field, "Updated file record");
        Ok(())
    }

    /// Count all records
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(schema::COUNT_FILES, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Close the underlying connection
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))?;
        tracing::debug!("Closed file store");
        Ok(())
    }

    /// Helper to convert a row to a FileRecord
    fn row_to_record(&self, row: &rusqlite::Row) -> rusqlite::Result<FileRecord> {
        Ok(FileRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            content: row.get(2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_insert_and_fetch() {
        let store = FileStore::open_in_memory().unwrap();

        let id = store.insert("notes.txt", "hello").unwrap();
        assert_eq!(id, 1);
        assert!(store.exists(id).unwrap());

        let records = store.fetch_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "notes.txt");
        assert_eq!(records[0].content, "hello");
        assert_eq!(store.fetch_content(id).unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn test_ids_are_unique_and_never_reused() {
        let store = FileStore::open_in_memory().unwrap();

        let mut seen = HashSet::new();
        for i in 0..20 {
            let id = store.insert(&format!("file{}.txt", i), "x").unwrap();
            assert!(seen.insert(id), "id {} assigned twice", id);
        }

        // Deleting the newest record must not free its id
        let last = *seen.iter().max().unwrap();
        store.delete(last).unwrap();
        let next = store.insert("again.txt", "y").unwrap();
        assert!(next > last);
    }

    #[test]
    fn test_delete_is_final() {
        let store = FileStore::open_in_memory().unwrap();

        let keep = store.insert("a.txt", "a").unwrap();
        let gone = store.insert("b.txt", "b").unwrap();
        store.delete(gone).unwrap();

        assert!(!store.exists(gone).unwrap());
        assert!(store.fetch_all().unwrap().iter().all(|r| r.id != gone));
        assert!(store.exists(keep).unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_missing_ids() {
        let store = FileStore::open_in_memory().unwrap();

        assert!(!store.exists(42).unwrap());
        assert_eq!(store.fetch_content(42).unwrap(), None);
        assert!(matches!(store.delete(42), Err(Error::NotFound(_))));
        assert!(matches!(
            store.update_field(42, Field::Name, "x"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_update_field() {
        let store = FileStore::open_in_memory().unwrap();

        let id = store.insert("old.txt", "before").unwrap();
        store.update_field(id, Field::Name, "new.txt").unwrap();
        store.update_field(id, Field::Content, "after").unwrap();

        let records = store.fetch_all().unwrap();
        assert_eq!(records[0].name, "new.txt");
        assert_eq!(records[0].content, "after");
    }

    #[test]
    fn test_values_are_bound_not_interpolated() {
        let store = FileStore::open_in_memory().unwrap();

        let name = "x'); DROP TABLE files; --";
        let id = store.insert(name, "content with 'quotes'").unwrap();

        let records = store.fetch_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].name, name);
    }

    #[test]
    fn test_reopen_keeps_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.db");

        let store = FileStore::open(&path).unwrap();
        store.insert("a.txt", "alpha").unwrap();
        store.insert("b.txt", "beta").unwrap();
        store.close().unwrap();

        let store = FileStore::open(&path).unwrap();
        let records = store.fetch_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content, "alpha");
        assert_eq!(records[1].content, "beta");

        let next = store.insert("c.txt", "gamma").unwrap();
        assert_eq!(next, 3);
    }
}
